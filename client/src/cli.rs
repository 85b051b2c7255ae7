use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use repair_common::{validation, Builder, RepairParallelism, RepairUnit, RepairUnitId};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "repair-client")]
#[command(about = "CLI para armar, derivar y validar repair units (JSON por stdout)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Arma una repair unit nueva desde cero
    Build {
        #[arg(long)]
        id: RepairUnitId,

        #[arg(long)]
        cluster: String,

        #[arg(long)]
        keyspace: String,

        /// Se puede repetir: --column-family cf1 --column-family cf2
        #[arg(long = "column-family", value_name = "CF")]
        column_families: Vec<String>,

        #[arg(long, allow_negative_numbers = true)]
        segments: i32,

        /// PARALLEL, SEQUENTIAL o DC_PARALLEL
        #[arg(long)]
        parallelism: RepairParallelism,

        /// Rechaza configuraciones inválidas en vez de aceptarlas tal cual
        #[arg(long)]
        strict: bool,
    },
    /// Deriva una unit existente (JSON) con otro id y overrides opcionales
    Derive {
        #[arg(long)]
        id: RepairUnitId,

        /// Archivo JSON de entrada; si falta se lee stdin
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        #[arg(long, allow_negative_numbers = true)]
        segments: Option<i32>,

        #[arg(long)]
        parallelism: Option<RepairParallelism>,

        #[arg(long)]
        strict: bool,
    },
    /// Reporta todas las violaciones de una unit (JSON)
    Validate {
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

/// Lee una unit en JSON desde un archivo o, si no hay ruta, desde stdin.
fn read_unit(input: Option<&Path>) -> Result<RepairUnit> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("no se pudo leer {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("no se pudo leer stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("JSON de repair unit inválido")
}

fn finalize(builder: &Builder, id: RepairUnitId, strict: bool) -> Result<RepairUnit> {
    if strict {
        return builder
            .try_build(id)
            .with_context(|| format!("configuración inválida para unit {id}"));
    }
    Ok(builder.build(id))
}

fn print_unit(unit: &RepairUnit) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(unit)?);
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            id,
            cluster,
            keyspace,
            column_families,
            segments,
            parallelism,
            strict,
        } => {
            let builder = Builder::new(cluster, keyspace, column_families, segments, parallelism);
            let unit = finalize(&builder, id, strict)?;

            info!(
                "unit {} creada: cluster={} keyspace={} segmentos={} paralelismo={}",
                unit.id(),
                unit.cluster_name(),
                unit.keyspace_name(),
                unit.segment_count(),
                unit.repair_parallelism()
            );
            print_unit(&unit)?;
        }

        Commands::Derive {
            id,
            input,
            segments,
            parallelism,
            strict,
        } => {
            let source = read_unit(input.as_deref())?;
            debug!("derivando desde unit {}", source.id());

            let mut builder = source.derive();
            if let Some(s) = segments {
                builder.segment_count(s);
            }
            if let Some(p) = parallelism {
                builder.repair_parallelism(p);
            }

            let unit = finalize(&builder, id, strict)?;
            info!("unit {} derivada de {}", unit.id(), source.id());
            print_unit(&unit)?;
        }

        Commands::Validate { input } => {
            let unit = read_unit(input.as_deref())?;
            let problems = validation::violations(&unit);

            if problems.is_empty() {
                println!("unit {}: ok", unit.id());
            } else {
                for p in &problems {
                    warn!("unit {}: {}", unit.id(), p);
                    println!("  - {}", p);
                }
                bail!("unit {} tiene {} problema(s)", unit.id(), problems.len());
            }
        }
    }

    Ok(())
}

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use clap::Parser;
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;

use crate::graph::{self, View};
use crate::mapper::{MappedRow, RecordMapper};
use crate::prelude::*;
use crate::row::InputRow;
use crate::table;

const PBAR_MAP: &str = "Mapping records: {human_pos} ({percent}%) | \
        elapsed: {elapsed_precise}{msg}";

/// Convert a NIC metadata table to Dublin Core and DCAT.
///
/// Reads the input CSV and writes four files into the output
/// directory: `dublin.ttl`, `dublin.csv`, `dcat.ttl` and `dcat.csv`.
#[derive(Debug, Default, Parser)]
pub(crate) struct Convert {
    /// Run verbosely. Print a confirmation line for each file
    /// written to the standard error stream. This option conflicts
    /// with the `--quiet` option.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Operate quietly; do not show progress. This option conflicts
    /// with the `--verbose` option.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write output files into `dir`. The directory is created if it
    /// does not exist.
    #[arg(short, long, value_name = "dir", default_value = "output")]
    outdir: PathBuf,

    /// The path to the input table.
    filename: PathBuf,
}

impl Convert {
    pub(crate) fn execute(self) -> NicmetaResult<()> {
        let vocab = Vocabulary::default();

        let mut reader =
            ReaderBuilder::new().from_path(&self.filename)?;
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            bail!(
                "input table '{}' has no header row",
                self.filename.display()
            );
        }

        let rows = reader
            .into_records()
            .collect::<Result<Vec<_>, _>>()?;

        let pbar = ProgressBarBuilder::new(PBAR_MAP, self.quiet)
            .len(rows.len() as u64)
            .build();

        let mapper = RecordMapper::new(&vocab);
        let records: Vec<MappedRow> = rows
            .iter()
            .enumerate()
            .map(|(index, record)| {
                pbar.inc(1);
                mapper.map(&InputRow::new(&headers, record), index)
            })
            .collect();

        pbar.finish_and_clear();
        create_dir_all(&self.outdir)?;

        let path = self.outdir.join("dublin.ttl");
        let dublin =
            graph::assemble(&records, View::DublinCore, &vocab);
        graph::write_turtle(&dublin, File::create(&path)?)?;
        self.confirm(&path);

        let path = self.outdir.join("dublin.csv");
        write_table(&path, &table::dublin_core_rows(&records))?;
        self.confirm(&path);

        let path = self.outdir.join("dcat.ttl");
        let dcat = graph::assemble(&records, View::Dcat, &vocab);
        graph::write_turtle(&dcat, File::create(&path)?)?;
        self.confirm(&path);

        let path = self.outdir.join("dcat.csv");
        write_table(&path, &table::dcat_rows(&records))?;
        self.confirm(&path);

        if self.verbose {
            eprintln!("converted {} records", records.len());
        }

        Ok(())
    }

    fn confirm(&self, path: &Path) {
        if self.verbose {
            eprintln!("+ created {}", path.display());
        }
    }
}

fn write_table<P, T>(path: P, rows: &[T]) -> NicmetaResult<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let mut wtr = WriterBuilder::new().from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

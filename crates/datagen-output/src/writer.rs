//! Tab-delimited row serialization and chunk-scoped output files.
//!
//! Two layouts are supported. Single-table collapses one record into one
//! row (optionally with the extra name/email/phone/address columns).
//! Multi-table normalizes a record into three related row types: customer,
//! revenue (only when revenue > 0), and one fact row per play event.
//!
//! All fields are tab-separated, lines are `\n`-terminated, timestamps are
//! rendered `YYYY-MM-DD HH:MM:SS`, and the paid column renders `yes`/`no`.

use crate::error::OutputError;
use chrono::{DateTime, Utc};
use datagen_core::Record;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Default buffer size for output files.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

type TabWriter = csv::Writer<BufWriter<File>>;

/// Render a timestamp in its canonical output form.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn yes_no(paid: bool) -> &'static str {
    if paid {
        "yes"
    } else {
        "no"
    }
}

/// Path of the single-table output file for a chunk.
///
/// `analytics.data` for a single-process run, `analytics_<chunk>.data` for a
/// parallel shard.
pub fn single_table_path(dir: &Path, chunk: Option<u64>) -> PathBuf {
    match chunk {
        None => dir.join("analytics.data"),
        Some(index) => dir.join(format!("analytics_{index}.data")),
    }
}

/// Paths of the three multi-table output files for a chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiTablePaths {
    pub customer: PathBuf,
    pub revenue: PathBuf,
    pub facts: PathBuf,
}

impl MultiTablePaths {
    /// `analytics_{customer,revenue,facts}.data`, suffixed `_<chunk>` for
    /// parallel shards.
    pub fn new(dir: &Path, chunk: Option<u64>) -> Self {
        let name = |table: &str| match chunk {
            None => format!("analytics_{table}.data"),
            Some(index) => format!("analytics_{table}_{index}.data"),
        };
        Self {
            customer: dir.join(name("customer")),
            revenue: dir.join(name("revenue")),
            facts: dir.join(name("facts")),
        }
    }

    /// All three paths, customer first.
    pub fn all(&self) -> [&Path; 3] {
        [&self.customer, &self.revenue, &self.facts]
    }
}

/// Header row for the single-table layout.
pub fn single_table_header(extra_data: bool) -> Vec<&'static str> {
    let mut columns = vec!["cid", "gender", "age", "country", "registerdate"];
    if extra_data {
        columns.extend(["name", "email", "phone", "address"]);
    }
    columns.extend([
        "friend_count",
        "lifetime",
        "citygame_played",
        "pictionarygame_played",
        "scramblegame_played",
        "snipergame_played",
        "revenue",
        "paid",
    ]);
    columns
}

/// Encode one record as a single-table row.
pub fn single_table_row(record: &Record, extra_data: bool) -> Vec<String> {
    let mut fields = vec![
        record.id.to_string(),
        record.gender.to_string(),
        record.age.to_string(),
        record.country.to_string(),
        format_timestamp(record.registered_at),
    ];
    if extra_data {
        fields.extend([
            record.name.clone(),
            record.email.clone(),
            record.phone.clone(),
            record.address.clone(),
        ]);
    }
    fields.extend([
        record.friend_count.to_string(),
        record.tenure_days.to_string(),
        record.play_counts.city.to_string(),
        record.play_counts.pictionary.to_string(),
        record.play_counts.scramble.to_string(),
        record.play_counts.sniper.to_string(),
        record.revenue.to_string(),
        yes_no(record.paid_subscriber).to_string(),
    ]);
    fields
}

/// Encode one record as a multi-table customer row.
pub fn customer_row(record: &Record) -> Vec<String> {
    vec![
        record.id.to_string(),
        record.name.clone(),
        record.gender.to_string(),
        record.age.to_string(),
        format_timestamp(record.registered_at),
        record.country.to_string(),
        record.friend_count.to_string(),
        record.tenure_days.to_string(),
    ]
}

/// Encode one record as a multi-table revenue row, if it has revenue.
pub fn revenue_row(record: &Record) -> Option<Vec<String>> {
    let paid_at = record.paid_at?;
    Some(vec![
        record.id.to_string(),
        format_timestamp(paid_at),
        record.revenue.to_string(),
    ])
}

/// Encode one record's play events as multi-table fact rows.
pub fn fact_rows(record: &Record) -> Vec<Vec<String>> {
    record
        .play_events
        .iter()
        .map(|event| {
            vec![
                record.id.to_string(),
                event.game.to_string(),
                format_timestamp(event.played_at),
            ]
        })
        .collect()
}

fn open_tab_writer(path: &Path) -> Result<TabWriter, OutputError> {
    let file = File::create(path)?;
    let buf = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    Ok(csv::WriterBuilder::new().delimiter(b'\t').from_writer(buf))
}

/// Writer for the flattened single-table layout.
///
/// Owns exactly one chunk-scoped file; no two chunks ever share a writer.
pub struct SingleTableWriter {
    writer: TabWriter,
    extra_data: bool,
}

impl SingleTableWriter {
    /// Create the output file, emitting the header row if requested.
    ///
    /// Only a single-process run emits the header; parallel shards do not.
    pub fn create(path: &Path, extra_data: bool, header: bool) -> Result<Self, OutputError> {
        let mut writer = open_tab_writer(path)?;
        if header {
            writer.write_record(single_table_header(extra_data))?;
        }
        Ok(Self { writer, extra_data })
    }

    /// Append one record as one row.
    pub fn write(&mut self, record: &Record) -> Result<(), OutputError> {
        self.writer
            .write_record(single_table_row(record, self.extra_data))?;
        Ok(())
    }

    /// Flush and close the file.
    pub fn finish(mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writer for the normalized three-table layout.
///
/// Holds the customer/revenue/facts file handles for one chunk; all three
/// are headerless.
pub struct MultiTableWriter {
    customer: TabWriter,
    revenue: TabWriter,
    facts: TabWriter,
}

impl MultiTableWriter {
    /// Create the three output files.
    pub fn create(paths: &MultiTablePaths) -> Result<Self, OutputError> {
        Ok(Self {
            customer: open_tab_writer(&paths.customer)?,
            revenue: open_tab_writer(&paths.revenue)?,
            facts: open_tab_writer(&paths.facts)?,
        })
    }

    /// Append one record: one customer row, a revenue row when the record
    /// has revenue, and one fact row per play event.
    pub fn write(&mut self, record: &Record) -> Result<(), OutputError> {
        self.customer.write_record(customer_row(record))?;
        if let Some(row) = revenue_row(record) {
            self.revenue.write_record(row)?;
        }
        for row in fact_rows(record) {
            self.facts.write_record(row)?;
        }
        Ok(())
    }

    /// Flush and close all three files.
    pub fn finish(mut self) -> Result<(), OutputError> {
        self.customer.flush()?;
        self.revenue.flush()?;
        self.facts.flush()?;
        Ok(())
    }
}

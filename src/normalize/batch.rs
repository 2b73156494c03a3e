//! Reading and writing address batches as JSON lines or CSV.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use regionnorm::AddressData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One JSON address object per line
    Jsonl,
    /// CSV with a header row naming address fields
    Csv,
}

/// Flat CSV row; street address lines are joined with newlines.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct CsvAddress {
    region_code: String,
    address_line: String,
    administrative_area: String,
    locality: String,
    dependent_locality: String,
    postal_code: String,
    sorting_code: String,
    organization: String,
    recipient: String,
    language_code: String,
}

impl From<CsvAddress> for AddressData {
    fn from(row: CsvAddress) -> Self {
        Self {
            region_code: row.region_code,
            address_line: row
                .address_line
                .lines()
                .map(String::from)
                .collect(),
            administrative_area: row.administrative_area,
            locality: row.locality,
            dependent_locality: row.dependent_locality,
            postal_code: row.postal_code,
            sorting_code: row.sorting_code,
            organization: row.organization,
            recipient: row.recipient,
            language_code: row.language_code,
        }
    }
}

impl From<AddressData> for CsvAddress {
    fn from(address: AddressData) -> Self {
        Self {
            region_code: address.region_code,
            address_line: address.address_line.join("\n"),
            administrative_area: address.administrative_area,
            locality: address.locality,
            dependent_locality: address.dependent_locality,
            postal_code: address.postal_code,
            sorting_code: address.sorting_code,
            organization: address.organization,
            recipient: address.recipient,
            language_code: address.language_code,
        }
    }
}

pub fn read_addresses<R: BufRead>(reader: R, format: Format) -> Result<Vec<AddressData>> {
    match format {
        Format::Jsonl => {
            let mut addresses = Vec::new();
            for (index, line) in reader.lines().enumerate() {
                let line = line.context("Failed to read input")?;
                if line.trim().is_empty() {
                    continue;
                }
                let address = serde_json::from_str(&line)
                    .with_context(|| format!("Invalid address on line {}", index + 1))?;
                addresses.push(address);
            }
            Ok(addresses)
        }
        Format::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(reader);
            let mut addresses = Vec::new();
            for result in csv_reader.deserialize::<CsvAddress>() {
                let row = result.context("Invalid CSV record")?;
                addresses.push(row.into());
            }
            Ok(addresses)
        }
    }
}

pub fn write_addresses<W: Write>(
    writer: W,
    format: Format,
    addresses: Vec<AddressData>,
) -> Result<()> {
    match format {
        Format::Jsonl => {
            let mut writer = writer;
            for address in &addresses {
                serde_json::to_writer(&mut writer, address)?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }
        Format::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for address in addresses {
                csv_writer.serialize(CsvAddress::from(address))?;
            }
            csv_writer.flush()?;
        }
    }
    Ok(())
}

use std::io::{Read, Write};

use chrono::{DateTime, Datelike, Timelike, Utc};
use crc32fast::Hasher;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("I/O error writing archive entry: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive already finalized")]
    Finalized,

    #[error("Entry exceeds 32-bit archive limits: {size} bytes")]
    TooLarge { size: u64 },
}

#[derive(Debug, Error)]
pub enum FinalizeError {
    #[error("I/O error writing archive trailer: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive already finalized")]
    AlreadyFinalized,
}

const LOCAL_FILE_HEADER_SIG: u32 = 0x0403_4b50;
const CENTRAL_DIR_SIG: u32 = 0x0201_4b50;
const END_OF_CENTRAL_DIR_SIG: u32 = 0x0605_4b50;
const VERSION_MADE_BY: u16 = 20;
const VERSION_NEEDED: u16 = 20;
// Entry names are produced by this service and are valid UTF-8.
const FLAG_UTF8: u16 = 1 << 11;
const METHOD_DEFLATED: u16 = 8;

struct EntryRecord {
    name: Vec<u8>,
    crc32: u32,
    compressed_size: u32,
    uncompressed_size: u32,
    header_offset: u32,
}

/// Incremental ZIP writer over an arbitrary byte sink.
///
/// Each entry is drained from its source, deflated, and written to the sink
/// before the next entry starts; only one entry is ever held in memory.
/// `finalize` appends the central directory and end-of-central-directory
/// record — the sink is not a complete archive until it succeeds. Entries
/// appear in submission order; no reordering happens here.
///
/// 32-bit layout only: entries or offsets past 4 GiB are rejected rather
/// than silently truncated.
pub struct ArchiveStreamer<W: Write> {
    sink: W,
    offset: u64,
    entries: Vec<EntryRecord>,
    dos_time: u16,
    dos_date: u16,
    finalized: bool,
}

impl<W: Write> ArchiveStreamer<W> {
    pub fn open(sink: W) -> Self {
        let (dos_time, dos_date) = dos_date_time(Utc::now());
        Self {
            sink,
            offset: 0,
            entries: Vec::new(),
            dos_time,
            dos_date,
            finalized: false,
        }
    }

    /// Drain `source`, compress it, and write it to the sink as the next
    /// archive entry. Duplicate names are accepted; uniqueness is the
    /// caller's responsibility.
    pub fn add_entry<R: Read>(&mut self, name: &str, mut source: R) -> Result<(), EntryError> {
        if self.finalized {
            return Err(EntryError::Finalized);
        }

        let mut data = Vec::new();
        source.read_to_end(&mut data)?;

        let mut hasher = Hasher::new();
        hasher.update(&data);
        let crc32 = hasher.finalize();

        let mut encoder = DeflateEncoder::new(
            Vec::with_capacity(data.len() / 2),
            Compression::new(9),
        );
        encoder.write_all(&data)?;
        let compressed = encoder.finish()?;

        let uncompressed_size = u32::try_from(data.len())
            .map_err(|_| EntryError::TooLarge { size: data.len() as u64 })?;
        let compressed_size = u32::try_from(compressed.len())
            .map_err(|_| EntryError::TooLarge { size: compressed.len() as u64 })?;
        let header_offset = u32::try_from(self.offset)
            .map_err(|_| EntryError::TooLarge { size: self.offset })?;

        let name_bytes = name.as_bytes().to_vec();
        let mut header = Vec::with_capacity(30 + name_bytes.len());
        header.extend_from_slice(&LOCAL_FILE_HEADER_SIG.to_le_bytes());
        header.extend_from_slice(&VERSION_NEEDED.to_le_bytes());
        header.extend_from_slice(&FLAG_UTF8.to_le_bytes());
        header.extend_from_slice(&METHOD_DEFLATED.to_le_bytes());
        header.extend_from_slice(&self.dos_time.to_le_bytes());
        header.extend_from_slice(&self.dos_date.to_le_bytes());
        header.extend_from_slice(&crc32.to_le_bytes());
        header.extend_from_slice(&compressed_size.to_le_bytes());
        header.extend_from_slice(&uncompressed_size.to_le_bytes());
        header.extend_from_slice(&(name_bytes.len() as u16).to_le_bytes());
        header.extend_from_slice(&0u16.to_le_bytes());

        self.sink.write_all(&header)?;
        self.sink.write_all(&name_bytes)?;
        self.sink.write_all(&compressed)?;
        self.offset += (header.len() + name_bytes.len() + compressed.len()) as u64;

        self.entries.push(EntryRecord {
            name: name_bytes,
            crc32,
            compressed_size,
            uncompressed_size,
            header_offset,
        });

        Ok(())
    }

    /// Write the central directory and end-of-central-directory record and
    /// flush the sink. Must be called exactly once, after all entries; a
    /// second call fails with `AlreadyFinalized`.
    pub fn finalize(&mut self) -> Result<u64, FinalizeError> {
        if self.finalized {
            return Err(FinalizeError::AlreadyFinalized);
        }

        let central_dir_offset = self.offset;
        for entry in &self.entries {
            let mut record = Vec::with_capacity(46 + entry.name.len());
            record.extend_from_slice(&CENTRAL_DIR_SIG.to_le_bytes());
            record.extend_from_slice(&VERSION_MADE_BY.to_le_bytes());
            record.extend_from_slice(&VERSION_NEEDED.to_le_bytes());
            record.extend_from_slice(&FLAG_UTF8.to_le_bytes());
            record.extend_from_slice(&METHOD_DEFLATED.to_le_bytes());
            record.extend_from_slice(&self.dos_time.to_le_bytes());
            record.extend_from_slice(&self.dos_date.to_le_bytes());
            record.extend_from_slice(&entry.crc32.to_le_bytes());
            record.extend_from_slice(&entry.compressed_size.to_le_bytes());
            record.extend_from_slice(&entry.uncompressed_size.to_le_bytes());
            record.extend_from_slice(&(entry.name.len() as u16).to_le_bytes());
            record.extend_from_slice(&0u16.to_le_bytes()); // extra field
            record.extend_from_slice(&0u16.to_le_bytes()); // comment
            record.extend_from_slice(&0u16.to_le_bytes()); // disk number start
            record.extend_from_slice(&0u16.to_le_bytes()); // internal attributes
            record.extend_from_slice(&0u32.to_le_bytes()); // external attributes
            record.extend_from_slice(&entry.header_offset.to_le_bytes());
            record.extend_from_slice(&entry.name);

            self.sink.write_all(&record)?;
            self.offset += record.len() as u64;
        }

        let central_dir_size = self.offset - central_dir_offset;
        let entry_count = self.entries.len().min(u16::MAX as usize) as u16;

        let mut trailer = Vec::with_capacity(22);
        trailer.extend_from_slice(&END_OF_CENTRAL_DIR_SIG.to_le_bytes());
        trailer.extend_from_slice(&0u16.to_le_bytes()); // this disk
        trailer.extend_from_slice(&0u16.to_le_bytes()); // central dir disk
        trailer.extend_from_slice(&entry_count.to_le_bytes());
        trailer.extend_from_slice(&entry_count.to_le_bytes());
        trailer.extend_from_slice(&(central_dir_size as u32).to_le_bytes());
        trailer.extend_from_slice(&(central_dir_offset as u32).to_le_bytes());
        trailer.extend_from_slice(&0u16.to_le_bytes()); // comment length

        self.sink.write_all(&trailer)?;
        self.offset += trailer.len() as u64;
        self.sink.flush()?;
        self.finalized = true;

        Ok(self.offset)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

fn dos_date_time(now: DateTime<Utc>) -> (u16, u16) {
    // DOS timestamps cannot represent dates before 1980.
    let year = now.year().clamp(1980, 2107) as u16;
    let date = ((year - 1980) << 9) | ((now.month() as u16) << 5) | now.day() as u16;
    let time = ((now.hour() as u16) << 11)
        | ((now.minute() as u16) << 5)
        | (now.second() as u16 / 2);
    (time, date)
}

use super::FeedError;
use crate::model::{EntityKind, FeedCollections};
use csv::QuoteStyle;
use kdam::tqdm;
use serde::Serialize;
use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// writes the collections as GTFS text files into `directory`, replacing any
/// files already there. optional files are left out when they have no rows.
pub fn write_feed(collections: &FeedCollections, directory: &Path) -> Result<(), FeedError> {
    prepare_output_directory(directory)?;
    write_table(
        directory,
        EntityKind::FeedInfo,
        collections.feed_infos.iter().map(|e| &e.record),
    )?;
    write_table(
        directory,
        EntityKind::Agency,
        collections.agencies.iter().map(|e| &e.record),
    )?;
    write_table(
        directory,
        EntityKind::ServiceCalendar,
        collections.calendars.iter().map(|e| &e.record),
    )?;
    write_table(
        directory,
        EntityKind::ServiceCalendarDate,
        collections.calendar_dates.iter().map(|e| &e.record),
    )?;
    write_table(
        directory,
        EntityKind::Route,
        collections.routes.iter().map(|e| &e.record),
    )?;
    write_table(
        directory,
        EntityKind::Trip,
        collections.trips.iter().map(|e| &e.record),
    )?;
    write_table(
        directory,
        EntityKind::StopTime,
        collections.stop_times.iter().map(|e| &e.record),
    )?;
    write_table(
        directory,
        EntityKind::Stop,
        collections.stops.iter().map(|e| &e.record),
    )?;
    write_table(
        directory,
        EntityKind::Transfer,
        collections.transfers.iter().map(|e| &e.record),
    )?;
    log::info!(
        "wrote {} entities to {}",
        collections.total_entities(),
        directory.display()
    );
    Ok(())
}

/// creates the output directory, or empties it of files when it exists.
pub fn prepare_output_directory(directory: &Path) -> Result<(), FeedError> {
    fs::create_dir_all(directory).map_err(|e| FeedError::io(directory, e))?;
    for path in directory_files(directory)? {
        log::debug!("removing {}", path.display());
        fs::remove_file(&path).map_err(|e| FeedError::io(&path, e))?;
    }
    Ok(())
}

/// bundles the files of `directory` into the zip archive `zip_path`.
pub fn compress_directory(directory: &Path, zip_path: &Path) -> Result<(), FeedError> {
    let file = File::create(zip_path).map_err(|e| FeedError::io(zip_path, e))?;
    let mut zip = ZipWriter::new(file);
    let files = directory_files(directory)?;
    for path in files.iter() {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file(name, options)?;
        let mut source = File::open(path).map_err(|e| FeedError::io(path, e))?;
        io::copy(&mut source, &mut zip).map_err(|e| FeedError::io(path, e))?;
    }
    zip.finish()?;
    log::info!(
        "compressed {} files into {}",
        files.len(),
        zip_path.display()
    );
    Ok(())
}

/// regular files of a directory, ordered by path.
fn directory_files(directory: &Path) -> Result<Vec<PathBuf>, FeedError> {
    let mut files = fs::read_dir(directory)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.path()))
                .collect::<Result<Vec<_>, io::Error>>()
        })
        .map_err(|e| FeedError::io(directory, e))?;
    files.retain(|p| p.is_file());
    files.sort();
    Ok(files)
}

fn write_table<'a, R, I>(directory: &Path, kind: EntityKind, records: I) -> Result<(), FeedError>
where
    R: Serialize + Default + 'a,
    I: ExactSizeIterator<Item = &'a R>,
{
    let filename = kind.filename();
    let n_rows = records.len();
    if n_rows == 0 && !kind.is_required() {
        log::debug!("skipping {filename}, no rows");
        return Ok(());
    }
    let path = directory.join(filename);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Necessary)
        .from_path(&path)
        .map_err(|e| FeedError::csv(filename, e))?;
    if n_rows == 0 {
        // serde writes the header with the first row, so an empty table
        // needs its header written by hand
        let header = header_of::<R>().map_err(|e| FeedError::csv(filename, e))?;
        writer
            .write_record(&header)
            .map_err(|e| FeedError::csv(filename, e))?;
    }
    let rows = tqdm!(records, desc = format!("writing {filename}"), total = n_rows);
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| FeedError::csv(filename, e))?;
    }
    eprintln!();
    writer.flush().map_err(|e| FeedError::io(&path, e))?;
    log::debug!("wrote {n_rows} rows to {}", path.display());
    Ok(())
}

/// the csv header serde produces for records of type `R`.
fn header_of<R: Serialize + Default>() -> Result<csv::StringRecord, csv::Error> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.serialize(R::default())?;
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    Ok(reader.headers()?.clone())
}

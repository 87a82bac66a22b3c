use super::{FilterAppError, FilterConfiguration};
use crate::feed::{compress_directory, read_feed, write_feed};
use crate::filter::{parse_bbox, BoundingBox, FeedGraph};
use clap::Parser;
use std::path::Path;

/// reduces a GTFS feed to the selected agencies, routes and area, then removes
/// everything the selection left without a purpose.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct FilterApp {
    /// directory holding the input feed. the filtered feed is written here too
    pub root_directory: String,
    #[arg(long, help = "path to a .toml or .json file with the filters to apply")]
    pub configuration_file: Option<String>,
    #[arg(
        long,
        value_parser = parse_bbox,
        help = "keep only stops inside name:min_lat,min_lon,max_lat,max_lon, overrides the configured box"
    )]
    pub bounding_box: Option<BoundingBox>,
    #[arg(long, default_value_t = String::from("gtfs.zip"), help = "input feed, relative to the root directory")]
    pub input_file: String,
    #[arg(long, default_value_t = String::from("out"), help = "output directory, relative to the root directory")]
    pub output_directory: String,
}

impl FilterApp {
    pub fn run(&self) -> Result<(), FilterAppError> {
        let mut conf = match &self.configuration_file {
            None => FilterConfiguration::default(),
            Some(f) => {
                log::info!("reading filter configuration from {f}");
                FilterConfiguration::try_from(f)?
            }
        };
        if let Some(bbox) = &self.bounding_box {
            conf.bounding_box = Some(bbox.clone());
        }

        let root = Path::new(&self.root_directory);
        let feed = read_feed(&root.join(&self.input_file))?;
        let mut graph = FeedGraph::from(feed);
        let report = conf.apply(&mut graph)?;
        log::info!(
            "{} entities remain after {} cleanup passes",
            graph.total_entities(),
            report.pass_count()
        );

        let output_directory = root.join(&self.output_directory);
        write_feed(&graph.snapshot(), &output_directory)?;
        let zip_path = root.join(format!("gtfs-{}.zip", conf.output_name()));
        compress_directory(&output_directory, &zip_path)?;
        eprintln!("finished.");
        Ok(())
    }
}

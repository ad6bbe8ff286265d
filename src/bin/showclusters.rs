use clap::Parser;
use log::LevelFilter;
use propmap::{
    ClusterConfig, CompassEngine, PropMapError, PropMapResult, Property, Viewport,
};
use simple_logger::SimpleLogger;
use std::{fs::File, io::BufReader, path::PathBuf};

/*-------------------------------------------------------------------------------------------------
 *                               Parse Command Line Arguments
 *-----------------------------------------------------------------------------------------------*/
///
/// Show a clustering pass over a listings file.
///
/// This program reads a JSON file of property listings in the backend payload shape, applies a
/// viewport, runs one filter and cluster pass, and logs the visible set, the marker density, and
/// every cluster. It exists for eyeballing what the map will draw for a given data set and view.
///
#[derive(Debug, Parser)]
#[clap(bin_name = "showclusters")]
#[clap(author, version, about)]
struct ShowClustersOptions {
    /// The path to the JSON listings file.
    ///
    /// If this is not specified, then the program will check for it in the "PROPMAP_LISTINGS"
    /// environment variable.
    #[clap(short, long)]
    #[clap(env = "PROPMAP_LISTINGS")]
    listings_file: PathBuf,

    /// The viewport as south,west,north,east,latitudeDelta,longitudeDelta
    ///
    /// If this is not specified, no viewport is applied: every located listing counts as visible
    /// and clustering runs at the default zoom.
    #[clap(parse(try_from_str=parse_viewport))]
    #[clap(allow_hyphen_values = true)]
    viewport: Option<Viewport>,

    /// Grouping radius in pixel-equivalent units.
    #[clap(short, long, default_value_t = 60.0)]
    radius: f64,

    /// The smallest group drawn as a cluster marker.
    #[clap(short, long, default_value_t = 2)]
    min_cluster_size: usize,

    /// Verbose output
    #[clap(short, long)]
    verbose: bool,
}

/// Parse a viewport argument.
fn parse_viewport(
    vp_str: &str,
) -> Result<Viewport, Box<dyn std::error::Error + Send + Sync + 'static>> {
    let parts: Vec<_> = vp_str.split(',').collect();

    if parts.len() != 6 {
        return Err(Box::new(PropMapError {
            msg: "expected south,west,north,east,latitudeDelta,longitudeDelta",
        }));
    }

    let south: f64 = parts[0].trim().parse()?;
    let west: f64 = parts[1].trim().parse()?;
    let north: f64 = parts[2].trim().parse()?;
    let east: f64 = parts[3].trim().parse()?;
    let latitude_delta: f64 = parts[4].trim().parse()?;
    let longitude_delta: f64 = parts[5].trim().parse()?;

    if north < south || east < west {
        return Err(format!(
            concat!(
                "south/west must not exceed north/east:",
                " south={} north={} west={} east={}"
            ),
            south, north, west, east
        )
        .into());
    }

    if south < -90.0 || north > 90.0 || west < -180.0 || east > 180.0 {
        return Err(format!(
            concat!(
                "bounds are out of range (-90.0 to 90.0 and -180.0 to 180.0):",
                " south={} north={} west={} east={}"
            ),
            south, north, west, east
        )
        .into());
    }

    Ok(Viewport {
        north,
        south,
        east,
        west,
        latitude_delta,
        longitude_delta,
    })
}

/*-------------------------------------------------------------------------------------------------
 *                                             Main
 *-----------------------------------------------------------------------------------------------*/
fn main() -> PropMapResult<()> {
    let opts = ShowClustersOptions::parse();

    let level = if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new()
        .with_level(level)
        .with_module_level("propmap", LevelFilter::Debug)
        .init()?;

    let file = File::open(&opts.listings_file)?;
    let listings: Vec<Property> = serde_json::from_reader(BufReader::new(file))?;
    log::info!(
        "loaded {} listings from {}",
        listings.len(),
        opts.listings_file.display()
    );

    let config = ClusterConfig {
        radius: opts.radius,
        min_cluster_size: opts.min_cluster_size,
        ..ClusterConfig::default()
    };

    let mut engine = CompassEngine::with_config(config);
    engine.set_properties(listings);

    if let Some(viewport) = opts.viewport {
        engine.update_viewport(viewport);
    }

    let density = engine.density();

    log::info!("");
    log::info!("   total listings - {:>9}", engine.properties().len());
    log::info!(" visible listings - {:>9}", engine.visible_properties().len());
    log::info!("         clusters - {:>9}", engine.clusters().len());
    log::info!("          density - {:>9}", Into::<&'static str>::into(density));
    log::info!("");

    for cluster in engine.clusters() {
        log::info!("          cluster - {}", cluster.id);
        log::info!("         centroid - {:.6},{:.6}", cluster.centroid.lat, cluster.centroid.lon);
        log::info!("            count - {:>9}", cluster.count);
        log::info!(
            "      price range - {:.0} to {:.0}",
            cluster.price_range.min,
            cluster.price_range.max
        );
        log::info!("");
    }

    if engine.clusters().is_empty() {
        log::warn!("No clusters at this zoom level.");
    }

    Ok(())
}

//! Assemble a map out of TileJSON identifiers or URLs given on the command line, and log what
//! came out of it. Run with `RUST_LOG=info`.

use mapbox_load::{Config, Layer, Mapbox};

const DEFAULT_SOURCES: [&str; 2] = ["examples.map-zr0njcqy", "examples.map-4l7djmvo"];

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut sources: Vec<String> = std::env::args().skip(1).collect();
    if sources.is_empty() {
        sources = DEFAULT_SOURCES.map(String::from).to_vec();
    }

    let mapbox = Mapbox::new(Config::default());
    let assembled = mapbox.auto("map", sources).await;

    for (index, option) in assembled.options.iter().enumerate() {
        match option {
            Ok(loaded) => log::info!(
                "#{index} '{}' at {:?}, zoom {}, thumbnail {:?}.",
                loaded.tilejson.id,
                loaded.tilejson.center,
                loaded.tilejson.zoom,
                loaded.tilejson.thumbnail
            ),
            Err(error) => log::error!("#{index} failed: {error}"),
        }
    }

    for layer in assembled.map.layers() {
        match layer {
            Layer::Tile(tiles) => log::info!(
                "Tile layer '{}', attribution: {:?}.",
                tiles.id(),
                tiles.attribution()
            ),
            Layer::Markers(markers) => {
                log::info!("Marker layer with {} markers.", markers.markers().len());
            }
        }
    }

    log::info!("Viewport: {:?}", assembled.map.viewport());
}

use anyhow::{anyhow, bail, Context, Result};
use log::{info, warn};
use solar_map_engine::config::AppConfig;
use solar_map_engine::search::{Debouncer, NominatimClient, SearchPanel, SearchView};
use solar_map_engine::selection::{LogRenderer, MapController};
use solar_map_engine::GeoPoint;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "commands: click LAT LON | toggle PLANET | all on|off | clear | type TEXT | enter TEXT | pick N | quit";

#[derive(Debug, PartialEq)]
enum Command {
    Click(GeoPoint),
    Toggle(String),
    All(bool),
    Clear,
    Type(String),
    Enter(String),
    Pick(usize),
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    let command = match verb {
        "click" => {
            let mut parts = rest.split_whitespace();
            let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
                bail!("usage: click LAT LON");
            };
            let lat: f64 = lat.parse().with_context(|| format!("bad latitude {lat:?}"))?;
            let lon: f64 = lon.parse().with_context(|| format!("bad longitude {lon:?}"))?;
            Command::Click(GeoPoint::try_new(lat, lon)?)
        }
        "toggle" if !rest.is_empty() => Command::Toggle(rest.to_string()),
        "all" => match rest {
            "on" => Command::All(true),
            "off" => Command::All(false),
            _ => bail!("usage: all on|off"),
        },
        "clear" => Command::Clear,
        "type" => Command::Type(rest.to_string()),
        "enter" => Command::Enter(rest.to_string()),
        "pick" => Command::Pick(rest.parse().with_context(|| format!("bad result number {rest:?}"))?),
        "quit" | "exit" => Command::Quit,
        _ => return Err(anyhow!("unknown command {line:?}; {HELP}")),
    };
    Ok(Some(command))
}

fn print_view(view: &SearchView) {
    for (idx, item) in view.items().iter().enumerate() {
        match view {
            SearchView::Results(_) => println!("  [{}] {}", idx, item),
            _ => println!("  {}", item),
        }
    }
}

fn print_projection(map: &MapController<LogRenderer>) {
    let Some(projection) = map.projection() else {
        return;
    };
    println!(
        "Sun-Earth {:.2} km, bearing {:.2} deg",
        projection.real_distance_km,
        projection.bearing_rad.to_degrees()
    );
    for projected in &projection.planets {
        println!(
            "  {:<8} ({:.6}, {:.6})  {:.2} km",
            projected.planet.name, projected.point.lat, projected.point.lon, projected.scaled_distance_km
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let geocoder = NominatimClient::new(&config.geocoder).context("failed to build geocoder client")?;
    let mut map = MapController::new(LogRenderer::new(), &config);
    let mut search = SearchPanel::new(geocoder, &config);
    let mut debouncer = Debouncer::new(config.geocoder.debounce());

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(err) => {
                        warn!("{err:#}");
                        continue;
                    }
                };
                match command {
                    Command::Click(at) => {
                        if let Some(outcome) = map.click(at) {
                            println!("{} placed at ({:.6}, {:.6})", outcome.body.name(), at.lat, at.lon);
                            print_projection(&map);
                        }
                    }
                    Command::Toggle(name) => match map.toggle_planet(&name) {
                        Some(all_checked) => {
                            info!("select-all checkbox now {}", all_checked);
                            print_projection(&map);
                        }
                        None => warn!("unknown planet {name:?}"),
                    },
                    Command::All(checked) => {
                        map.select_all(checked);
                        print_projection(&map);
                    }
                    Command::Clear => map.clear(),
                    Command::Type(text) => debouncer.push(text),
                    Command::Enter(text) => {
                        debouncer.cancel();
                        match search.submit(&text, map.renderer_mut()).await {
                            Some(place) => println!("centered on {}", place.display_name),
                            None => print_view(search.view()),
                        }
                    }
                    Command::Pick(idx) => match search.pick(idx, map.renderer_mut()) {
                        Some(place) => println!("centered on {}", place.display_name),
                        None => warn!("no search result #{idx}"),
                    },
                    Command::Quit => break,
                }
            }
            Some(query) = debouncer.settled() => {
                print_view(search.search(&query).await);
            }
        }
    }
    Ok(())
}

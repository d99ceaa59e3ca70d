use catalog_ui::terminal::TerminalPage;
use catalog_ui::{Catalog, CatalogApp, FilterCriteria, BOOKS_PER_PAGE};
use std::env;
use tracing::{error, info};

const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
const USAGE: &str = "Usage: catalog-ui [--title T] [--author ID] [--genre ID] [--pages N] [--theme day|night] [--detail BOOK_ID]";

#[derive(Debug, Default, PartialEq)]
struct Command {
    criteria: Option<FilterCriteria>,
    pages: usize,
    theme: Option<String>,
    detail: Option<String>,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut command = Command {
            pages: 1,
            ..Default::default()
        };

        let mut iter = args.iter();
        while let Some(flag) = iter.next() {
            let value = iter
                .next()
                .ok_or_else(|| format!("Missing value for {}", flag))?
                .clone();

            match flag.as_str() {
                "--title" => command.criteria.get_or_insert_with(Default::default).title = value,
                "--author" => command.criteria.get_or_insert_with(Default::default).author = value,
                "--genre" => command.criteria.get_or_insert_with(Default::default).genre = value,
                "--pages" => {
                    command.pages = value
                        .parse()
                        .map_err(|e| format!("Invalid --pages value '{}': {}", value, e))?
                }
                "--theme" => command.theme = Some(value),
                "--detail" => command.detail = Some(value),
                other => return Err(format!("Unknown argument {}", other)),
            }
        }

        Ok(command)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("catalog_ui=info")
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            error!("{}", e);
            info!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let catalog_path =
        env::var("CATALOG_PATH").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
    let page_size = match env::var("BOOKS_PER_PAGE") {
        Ok(raw) => raw.trim().parse()?,
        Err(_) => BOOKS_PER_PAGE,
    };
    let prefers_dark = env::var("PREFERS_DARK")
        .map(|v| matches!(v.trim(), "1" | "true"))
        .unwrap_or(false);

    let catalog = Catalog::load(&catalog_path)?;
    let mut app = CatalogApp::new(catalog, page_size, TerminalPage::new(prefers_dark))?;
    info!(
        "Loaded {} books and {} authors from {}",
        app.catalog().books().len(),
        app.catalog().authors().len(),
        catalog_path
    );
    app.initialize();

    if let Some(criteria) = &command.criteria {
        app.submit_search(criteria);
    }
    for _ in 1..command.pages {
        if !app.show_more() {
            break;
        }
    }
    if let Some(theme) = &command.theme {
        app.submit_theme(theme);
    }
    if let Some(id) = &command.detail {
        if !app.open_detail(id) {
            info!("No book with id {}", id);
        }
    }

    for line in app.page_mut().take_output() {
        println!("{}", line);
    }

    Ok(())
}

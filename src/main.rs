use color_eyre::eyre::{Result, WrapErr, eyre};
use dotenv::dotenv;
use slotdesk_client::{
    api::ApiClient,
    config::ClientConfig,
    display::render_grid,
    notify::{Notice, report},
    schedule::WorkingScheduleForm,
};
use slotdesk_core::models::slot::WeekDay;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

const USAGE: &str = "usage: slotdesk [show | toggle <day:slot>... | select-day <day> | clear-day <day>]";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = std::env::args().skip(1).collect();

    let api = ApiClient::new(&config)?;
    info!(api = api.base_url(), "Loading working schedule");
    let mut form = WorkingScheduleForm::new(api, config.grid()?);
    form.load().await?;

    let edited = match args.first().map(String::as_str) {
        None | Some("show") => false,
        Some("toggle") => {
            for raw in &args[1..] {
                let (day, slot_index) = parse_cell(raw)?;
                if let Err(err) = form.selection_mut().toggle(day, slot_index) {
                    print_notice(&report(&err));
                }
            }
            true
        }
        Some("select-day") => {
            form.selection_mut().select_all_for_day(parse_day(args.get(1))?);
            true
        }
        Some("clear-day") => {
            form.selection_mut().clear_for_day(parse_day(args.get(1))?);
            true
        }
        Some(other) => return Err(eyre!("Unknown command: {other}\n{USAGE}")),
    };

    if edited {
        match form.save().await {
            Ok(summary) => print_notice(&Notice::success(format!(
                "Schedule saved with {} active slot(s)",
                summary.active_ids.len()
            ))),
            Err(err) => print_notice(&report(&err)),
        }
    }

    print!("{}", render_grid(form.selection()));
    Ok(())
}

fn parse_day(raw: Option<&String>) -> Result<WeekDay> {
    let raw = raw.ok_or_else(|| eyre!("Missing weekday\n{USAGE}"))?;
    Ok(raw.parse::<WeekDay>()?)
}

/// Parses `wed:3` into a weekday and slot index.
fn parse_cell(raw: &str) -> Result<(WeekDay, usize)> {
    let (day, slot) = raw
        .split_once(':')
        .ok_or_else(|| eyre!("Expected <day:slot>, got {raw}"))?;
    let day: WeekDay = day.parse()?;
    let slot: usize = slot
        .parse()
        .wrap_err_with(|| format!("Invalid slot index in {raw}"))?;
    Ok((day, slot))
}

fn print_notice(notice: &Notice) {
    println!("[{:?}] {}", notice.level, notice.message);
}

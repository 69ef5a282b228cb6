use coins::cli::{parse_args, USAGE};
use coins::{CoinsConfig, CoinsContent, CoinsViewModel};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coins=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let args = parse_args(std::env::args())?;
    if args.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = CoinsConfig::from_env();
    if let Some(page_size) = args.page_size {
        config = config.with_page_size(page_size);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let content = CoinsContent::from_config(&config)?;
        let mut view = CoinsViewModel::new(content);

        view.refresh().await?;
        for _ in 1..args.pages {
            let page = view.load_next_page().await?;
            if page.is_empty() {
                break;
            }
        }

        if let Some(search) = args.search {
            view.set_search_text(search);
        }

        for index in 0..view.count() {
            let Some(cell) = view.cell_at(index) else {
                continue;
            };
            let rank = view.item_at(index).map(|c| c.rank.as_str()).unwrap_or("-");
            println!(
                "{:>4}  {:<8} {:<24} {:>16} {:>9} {}",
                rank,
                cell.symbol,
                cell.name,
                cell.formatted_price(),
                cell.formatted_change(),
                if cell.icon.is_some() { "icon" } else { "-" }
            );
        }
        println!("{} coins", view.count());

        if let Some(row) = args.detail {
            match view.detail_at(row - 1) {
                Some(detail) => {
                    println!();
                    println!("{} ({})", detail.name, detail.symbol);
                    println!("  price       {}", detail.formatted_price());
                    println!("  24h change  {}", detail.formatted_change());
                    println!("  market cap  {}", detail.formatted_market_cap());
                    println!("  max supply  {}", detail.formatted_supply());
                    println!("  24h volume  {}", detail.formatted_volume());
                }
                None => tracing::warn!(row, count = view.count(), "No coin at requested row"),
            }
        }

        Ok::<(), color_eyre::Report>(())
    })
}

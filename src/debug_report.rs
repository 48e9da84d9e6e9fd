use crate::CliConfig;
use curbtime::{AggregateStats, RankResultVerbose, SuspensionSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Wraps text in ANSI codes when color is on, passes it through otherwise.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, code: &str, s: impl AsRef<str>) -> String {
            match self.enabled {
                true => format!("{code}{}{RESET}", s.as_ref()),
                false => s.as_ref().to_string(),
            }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(color, s)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(BOLD, s)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(DIM, s)
        }
    }
}

pub fn print_run(config: &CliConfig, res: &RankResultVerbose, suspensions: &SuspensionSummary) {
    let palette = ansi::Palette::new(config.color);
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Regulations: {}", config.features.display()), ansi::CYAN))
    );

    println!("\n{}", palette.paint("━━━ Records ━━━", ansi::GRAY));
    print_stats(&res.details.stats, &palette);

    println!("\n{}", palette.paint("━━━ Buckets ━━━", ansi::GRAY));
    if res.details.bucket.is_empty() {
        println!("{}", palette.dim("  No free parking windows"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • No rule mentions \"Free Parking\"");
        println!("  • Rules lack a \"From ... Until\" clause");
        println!("  • Start times are not shaped like \"Nov 12 Mon 9:00am\"");
        println!("\n{}", palette.dim("  Tip: pass --verbose to log every skipped record"));
    } else {
        print_buckets(config, res, &palette);
    }

    println!("\n{}", palette.paint("━━━ Suspensions ━━━", ansi::GRAY));
    print_suspensions(suspensions, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Aggregate: {}  │  Rank: {}",
        palette.paint(format!("{:?}", res.details.total), ansi::GREEN),
        palette.paint(format!("{:?}", res.details.aggregate), ansi::CYAN),
        palette.dim(format!("{:?}", res.details.rank)),
    );
    println!();
}

fn print_stats(stats: &AggregateStats, palette: &ansi::Palette) {
    println!(
        "  {} {}  {} {}  {} {}",
        palette.dim("seen:"),
        palette.paint(stats.records.to_string(), ansi::BLUE),
        palette.dim("free parking:"),
        palette.paint(stats.free_parking.to_string(), ansi::GREEN),
        palette.dim("buckets:"),
        palette.paint(stats.buckets.to_string(), ansi::CYAN),
    );
    if stats.skipped() > 0 {
        println!(
            "  {} {}  {} {}",
            palette.dim("malformed:"),
            palette.paint(stats.malformed.to_string(), ansi::YELLOW),
            palette.dim("unparseable:"),
            palette.paint(stats.unparseable.to_string(), ansi::YELLOW),
        );
    }
}

fn print_buckets(config: &CliConfig, res: &RankResultVerbose, palette: &ansi::Palette) {
    let hours = config.options.hours;
    for (idx, (label, count)) in res.details.bucket.iter().enumerate() {
        let ranked = res.windows.iter().position(|w| w.label == label);
        let marker = match ranked {
            Some(pos) => palette.paint(curbtime::ordinal(pos + 1), ansi::GREEN),
            None if !hours.contains(label.hour()) => palette.dim("outside hours"),
            None => palette.dim("-"),
        };
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(label.to_string()),
            palette.dim("│"),
            palette.paint(format!("× {count}"), ansi::YELLOW),
            marker,
        );
    }
}

fn print_suspensions(suspensions: &SuspensionSummary, palette: &ansi::Palette) {
    if suspensions.is_empty() {
        println!("{}", palette.dim("  None"));
        return;
    }
    for date in &suspensions.dates {
        println!("  {} {}", palette.dim("date:"), palette.paint(date, ansi::BLUE));
    }
    for name in &suspensions.exceptions {
        println!("  {} {}", palette.dim("meters:"), palette.paint(name, ansi::CYAN));
    }
}

use play_counter::cli::{init_logging, DEFAULT_LEVEL};
use play_counter::models::ReportOptions;
use play_counter::report_file;

const INPUT_PATH: &str = "exhibitA-input.csv";
const TARGET_DISTINCT_SONGS: usize = 346;

type Void = Result<(), Box<dyn std::error::Error>>;

fn main() -> Void {
    init_logging(DEFAULT_LEVEL)?;

    let options = ReportOptions {
        target_distinct_songs: TARGET_DISTINCT_SONGS,
    };
    let report = report_file(INPUT_PATH, &options)?;

    println!("{}", report);

    Ok(())
}

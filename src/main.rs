use phaseload::error::AppResult;

fn main() -> AppResult<()> {
    phaseload::entry::run()
}

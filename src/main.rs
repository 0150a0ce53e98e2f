use cidr_subtract::config;
use cidr_subtract::job::{read_job, run_job, write_result};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file(config::LOG_CONFIG_FILE, Default::default())?;
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let job = read_job(&config::job_file())?;
    let result = run_job(&job)?;
    let result_file = config::result_file();
    let json = write_result(&result, result_file.as_deref())?;
    if result_file.is_none() {
        println!("{json}");
    }

    Ok(())
}

use std::fs::File;
use std::path::PathBuf;

use env_logger::Env;
use failure::{format_err, Error};
use log::info;
use structopt::StructOpt;

use intervals::Intervals;

#[derive(StructOpt, Debug)]
#[structopt(name = "intervals")]
struct Opt {
    /// File with one `low,high` interval per line.
    #[structopt(long, parse(from_os_str), default_value = "data.txt")]
    data: PathBuf,

    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    min_low: i64,

    #[structopt(long, default_value = "40", allow_hyphen_values = true)]
    max_high: i64,

    /// Also write the intervals, gaps and overlaps as JSON.
    #[structopt(long, parse(from_os_str))]
    json: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opt = Opt::from_args();

    let data = intervals::load(&opt.data)?;
    info!("loaded {} intervals from {}", data.len(), opt.data.display());

    let mut intervals = Intervals::new(opt.min_low, opt.max_high);
    intervals.extend(data);

    print!("{}", intervals.print());

    if let Some(filename) = &opt.json {
        let f = File::create(filename)
            .map_err(|e| format_err!("could not create {}: {}", filename.display(), e))?;
        intervals.summary().write_json(f)?;
        info!("wrote {}", filename.display());
    }

    Ok(())
}

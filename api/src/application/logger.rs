use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

pub fn init_logger(args: &LogArgs) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_new(&args.filter)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if args.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow!("failed to initialise logger: {e}"))
}

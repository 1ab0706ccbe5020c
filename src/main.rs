use aws_vpc_inventory::args::Args;
use aws_vpc_inventory::aws::AwsCli;
use aws_vpc_inventory::init_logging;
use aws_vpc_inventory::inspect_vpc;
use aws_vpc_inventory::prompt::ConsoleConfirm;
use clap::Parser;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_config)?;
    //
    log::info!("#Start main()");

    let api = AwsCli::new(args.region.clone(), args.profile.clone());
    let mut confirm = ConsoleConfirm::stdio();

    match inspect_vpc(&api, &mut confirm, &args.inspect_options()) {
        Ok(Some(report)) => log::info!(
            "#End main() vpc={} instances={} files={}",
            report.vpc_id,
            report.instances.len(),
            report.written.len()
        ),
        Ok(None) => log::info!("#End main() nothing selected, no files written"),
        Err(e) => {
            log::error!("{e}");
            return Err(e);
        }
    }

    Ok(())
}

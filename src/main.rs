use idl_demo::utils::{logger, validation::Validate};
use idl_demo::{CliConfig, Demo, DemoError, InterfaceManifest, InterfaceRegistry};

fn main() {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting idl-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config) {
        tracing::debug!("Run failed: {:?}", e);
        fail(&e);
    }
}

fn fail(e: &DemoError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn run(config: CliConfig) -> Result<(), DemoError> {
    config.validate()?;

    let registry = match &config.manifest {
        Some(path) => {
            tracing::info!("📁 Loading interface manifest from: {}", path);
            InterfaceRegistry::with_manifest(InterfaceManifest::from_file(path)?)?
        }
        None => InterfaceRegistry::builtin()?,
    };

    let demo = Demo::new(registry, config);
    let stdout = std::io::stdout();
    let iid = demo.run(&mut stdout.lock())?;

    tracing::info!("✅ Reported interface GUID {}", iid.braced());
    Ok(())
}

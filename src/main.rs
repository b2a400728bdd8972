use aoc_new_year::config::{self, toml_config::TomlConfig};
use aoc_new_year::domain::ports::DirectoryStore;
use aoc_new_year::utils::logger::{self, default_log_file, LogConfig};
use aoc_new_year::utils::validation::Validate;
use aoc_new_year::{CliConfig, LocalDirectoryStore, RunConfig, ScaffoldError, Scaffolder};

fn main() {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    // 解析命令列參數
    let cli = match CliConfig::try_parse_args(args) {
        Ok(cli) => cli,
        Err(e) if config::is_display_request(&e) => {
            // --help / --version 也留下執行紀錄
            start_logging(&program, &LogConfig::new(default_log_file(&program)));
            tracing::debug!("displaying {:?}", e.kind());
            e.exit()
        }
        Err(e) => {
            start_logging(&program, &LogConfig::new(default_log_file(&program)));
            fail(config::argument_error(&e));
        }
    };

    // 載入設定檔
    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            start_logging(&program, &cli.log_config(&program, None));
            fail(e);
        }
    };

    start_logging(&program, &cli.log_config(&program, file_config.as_ref()));
    tracing::debug!("CLI config: {:?}", cli);

    if let Some(file_config) = &file_config {
        if let Err(e) = file_config.validate() {
            fail(e);
        }
        tracing::info!("Configuration loaded from {:?}", cli.config);
    }

    // 驗證年份與路徑
    let run_config = match cli.resolve(file_config.as_ref()) {
        Ok(run_config) => run_config,
        Err(e) => fail(e),
    };

    let scaffolder = Scaffolder::with_layout(LocalDirectoryStore::new(), run_config.layout.clone());
    if run_config.dry_run {
        dry_run(&scaffolder, &run_config);
        return;
    }

    match scaffolder.create_project_tree(&run_config.year, &run_config.path) {
        Ok(outcome) if outcome.year_dir_exists => {
            println!("\nDirectory structure in {}:", run_config.path.display());
            print!("{}", outcome.log);
            tracing::info!("Program complete with no errors");
            println!("\n\nProgram complete with no errors, Goodbye!");
        }
        Ok(outcome) => fail(ScaffoldError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!(
                "{} is missing after creation",
                outcome.year_dir.display()
            ),
        ))),
        Err(e) => fail(e),
    }
}

fn start_logging(program: &str, log_config: &LogConfig) {
    if let Err(e) = logger::init_cli_logger(log_config) {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
    logger::log_run_banner(program);
}

fn dry_run<S: DirectoryStore>(scaffolder: &Scaffolder<S>, run_config: &RunConfig) {
    let plan = scaffolder.plan(&run_config.year, &run_config.path);

    tracing::info!("🔍 DRY RUN MODE - nothing will be created");
    if scaffolder.store().exists(&plan.year_dir) {
        tracing::warn!(
            "{} already exists, a real run would fail",
            plan.year_dir.display()
        );
    }

    println!("\nWould create in {}:", run_config.path.display());
    for dir in &plan.dirs {
        println!("{}", dir.display);
    }
}

fn fail(e: ScaffoldError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

mod cli;
mod renderer;

fn main() {
    colog::init();
    let args = cli::Command::clap_parse();
    match args.resolve() {
        cli::Action::Version => {
            println!("{}", cli::version_string());
        }
        cli::Action::Usage => {
            eprintln!("{}", cli::version_string());
            eprintln!("\n{}", cli::usage());
            std::process::exit(1);
        }
        cli::Action::Run(config) => {
            if let Err(e) = renderer::Renderer::run_command(config) {
                let error_chain: Vec<String> = e.chain()
                    .map(|e| e.to_string())
                    .collect();
                log::error!("{}", error_chain.join("\n"));
                std::process::exit(1);
            }
        }
    }
}

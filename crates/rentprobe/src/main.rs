use rentprobe::cli;

#[tokio::main]
async fn main() {
    let exit_code = match cli::run_app().await {
        Ok(code) => code,
        Err(e) => {
            cli::present_error(e);
            1
        }
    };
    std::process::exit(exit_code);
}

// SPDX-License-Identifier: MPL-2.0
use iced_vitrine::app::{self, Flags};
use iced_vitrine::backend::{auth, Backend};
use iced_vitrine::config;
use pico_args;
use std::io::Write;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if let Ok(Some(email)) = args.opt_value_from_str::<_, String>("--create-admin") {
        create_admin(&email);
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap(),
        product_id: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}

/// One-shot initial setup: registers an administrator account and writes its
/// role document, then exits. The password is read from stdin.
fn create_admin(email: &str) {
    let config = config::load().unwrap_or_default();
    let Some(backend) = Backend::from_config(&config.backend) else {
        eprintln!("Backend is not configured; set [backend] project_id and api_key first.");
        std::process::exit(1);
    };

    eprint!("Password for {email}: ");
    let _ = std::io::stderr().flush();
    let mut password = String::new();
    if std::io::stdin().read_line(&mut password).is_err() {
        eprintln!("Failed to read password.");
        std::process::exit(1);
    }
    let password = password.trim_end_matches(['\r', '\n']);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    match runtime.block_on(auth::create_admin_user(&backend, email, password)) {
        Ok(admin) => {
            println!("Administrator created: {} ({})", admin.email, admin.uid);
        }
        Err(e) => {
            eprintln!("Failed to create administrator: {e}");
            std::process::exit(1);
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use sprigrs::Cli;

fn main() {
    let cli = Cli::parse();
    sprigrs::logging::init();
    if let Err(e) = sprigrs::run(cli) {
        eprintln!("error[{}]: {}", e.kind(), e);
        std::process::exit(1);
    }
}

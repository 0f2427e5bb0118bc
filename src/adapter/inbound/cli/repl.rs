//! The interactive prompt loop.

use std::io::BufRead;

use tracing::debug;

use crate::adapter::inbound::cli::dispatch::{Dispatcher, Flow};
use crate::adapter::inbound::cli::menu;
use crate::adapter::inbound::cli::output;
use crate::error::Result;

/// Read commands from `input` until `quit` or end of input.
///
/// # Errors
/// Returns an IO error if reading `input` fails.
pub fn run<R: BufRead>(mut input: R, dispatcher: &mut Dispatcher) -> Result<()> {
    let mut line = Vec::new();
    loop {
        menu::print_menu(dispatcher.session());
        output::prompt(menu::PROMPT);

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            debug!("End of input");
            break;
        }

        if dispatcher.handle_bytes(&line) == Flow::Quit {
            break;
        }
    }

    menu::print_goodbye();
    Ok(())
}

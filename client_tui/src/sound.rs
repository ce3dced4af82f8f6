use std::io::{self, Write};

use game_core::Sound;

/// Terminal bell, the only sound a plain terminal can make
#[derive(Debug, Default, Clone, Copy)]
pub struct Bell;

impl Sound for Bell {
    fn play(&mut self) {
        let mut out = io::stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            tracing::debug!(%err, "bell failed");
        }
    }
}

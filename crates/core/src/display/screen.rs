// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concrete screens that write frames to an output stream

use super::{Display, DisplayError};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// LED wall identified by a panel id
pub struct LedWall<W = Stdout> {
    id: String,
    out: Mutex<W>,
}

impl LedWall<Stdout> {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_writer(id, io::stdout())
    }
}

impl<W: Write + Send> LedWall<W> {
    pub fn with_writer(id: impl Into<String>, out: W) -> Self {
        Self {
            id: id.into(),
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Display for LedWall<W> {
    fn name(&self) -> String {
        format!("LED-WALL#{}", self.id)
    }

    fn draw(&self, frame: &str) -> Result<(), DisplayError> {
        write_titled(&self.out, &self.name(), frame)
    }
}

/// Projector in a named room
pub struct Projector<W = Stdout> {
    room: String,
    out: Mutex<W>,
}

impl Projector<Stdout> {
    pub fn new(room: impl Into<String>) -> Self {
        Self::with_writer(room, io::stdout())
    }
}

impl<W: Write + Send> Projector<W> {
    pub fn with_writer(room: impl Into<String>, out: W) -> Self {
        Self {
            room: room.into(),
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Display for Projector<W> {
    fn name(&self) -> String {
        format!("PROJECTOR({})", self.room)
    }

    fn draw(&self, frame: &str) -> Result<(), DisplayError> {
        write_titled(&self.out, &self.name(), frame)
    }
}

/// Plain line output, used as the stage monitor for node reactions
pub struct Console<W = Stdout> {
    out: Mutex<W>,
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write + Send> Console<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Display for Console<W> {
    fn name(&self) -> String {
        "console".to_string()
    }

    fn draw(&self, frame: &str) -> Result<(), DisplayError> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", frame)
            .and_then(|()| out.flush())
            .map_err(|source| DisplayError::Io {
                display: self.name(),
                source,
            })
    }
}

fn write_titled<W: Write>(out: &Mutex<W>, name: &str, frame: &str) -> Result<(), DisplayError> {
    let mut out = out.lock().unwrap_or_else(|e| e.into_inner());
    write!(out, "[{}]\n{}\n\n", name, frame)
        .and_then(|()| out.flush())
        .map_err(|source| DisplayError::Io {
            display: name.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;

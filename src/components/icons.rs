//! Icon definitions.
//!
//! Maps semantic names to lucide icons so components never name a glyph
//! directly.

use icondata::Icon;

pub const TERMINAL: Icon = icondata::LuTerminal;
pub const FOLDER: Icon = icondata::LuFolder;
pub const FILE: Icon = icondata::LuFile;
pub const CPU: Icon = icondata::LuCpu;
pub const MEMORY: Icon = icondata::LuMemoryStick;
pub const SERVER: Icon = icondata::LuServer;

use log::LevelFilter;

/// Channel levels of the 6x6x6 colour cube, indices 16..=231.
pub const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

pub const CUBE_FIRST_INDEX: u8 = 16;

pub const GRAY_FIRST_INDEX: u8 = 232;
pub const GRAY_STEPS: u8 = 24;
pub const GRAY_START: u8 = 0x08;
pub const GRAY_STEP: u8 = 10;

pub const PALETTE_SIZE: usize = 240;

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

pub const PROMPT: &str = "Insert a hex value (empty to exit): ";

pub const HELP_TEMPLATE: &str = "\
{about}
SYNTAX:
    {usage}

OPTIONS:
{options}";

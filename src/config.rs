use image::imageops::FilterType;
use std::num::NonZeroU32;

pub const CHAR_DEFAULT: char = '█';
pub const CHAR_BLACK: char = ' ';
pub const IMAGE_X_DEFAULT: u32 = 60;
pub const IMAGE_Y_DEFAULT: u32 = 30;

/// Each pixel is printed this many times so the cell comes out roughly square.
pub const PIXEL_WIDTH: usize = 2;

/// Extensions accepted for input images, compared case-insensitively.
pub const SUPPORTED_FORMATS: &[&str] = &[
    "bmp", "dib", "eps", "gif", "icns", "ico", "im", "jpeg", "jpg", "msp", "pcx", "png", "ppm",
    "sgi", "spider", "tga", "tiff", "webp", "xbm",
];

pub const ENV_CHAR: &str = "TERMINAL_IMAGE_CHAR";
pub const ENV_WIDTH: &str = "TERMINAL_IMAGE_WIDTH";
pub const ENV_HEIGHT: &str = "TERMINAL_IMAGE_HEIGHT";

/// Process-wide defaults, built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    pub default_char: char,
    pub default_width: NonZeroU32,
    pub default_height: NonZeroU32,
    pub supported_formats: &'static [&'static str],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_char: CHAR_DEFAULT,
            default_width: NonZeroU32::new(IMAGE_X_DEFAULT).unwrap_or(NonZeroU32::MIN),
            default_height: NonZeroU32::new(IMAGE_Y_DEFAULT).unwrap_or(NonZeroU32::MIN),
            supported_formats: SUPPORTED_FORMATS,
        }
    }
}

impl Settings {
    /// Built-in defaults, overridden by any valid `TERMINAL_IMAGE_*` variables.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(value) = std::env::var(ENV_CHAR) {
            match value.chars().next() {
                Some(c) if !c.is_control() && !c.is_whitespace() => settings.default_char = c,
                _ => log::debug!("Ignoring {ENV_CHAR}={value:?}"),
            }
        }

        if let Ok(value) = std::env::var(ENV_WIDTH) {
            match parse_dimension(&value) {
                Ok(width) => settings.default_width = width,
                Err(_) => log::debug!("Ignoring {ENV_WIDTH}={value:?}"),
            }
        }

        if let Ok(value) = std::env::var(ENV_HEIGHT) {
            match parse_dimension(&value) {
                Ok(height) => settings.default_height = height,
                Err(_) => log::debug!("Ignoring {ENV_HEIGHT}={value:?}"),
            }
        }

        settings
    }

    pub fn is_supported_extension(&self, extension: &str) -> bool {
        self.supported_formats
            .iter()
            .any(|format| format.eq_ignore_ascii_case(extension))
    }
}

/// Why a dimension argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    NotANumber,
    NotPositive,
}

/// Parse a target dimension. Only plain digits count as a number, so signs
/// and whitespace are rejected as non-numeric.
pub fn parse_dimension(value: &str) -> Result<NonZeroU32, DimensionError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(DimensionError::NotANumber);
    }

    let number: u32 = value.parse().map_err(|_| DimensionError::NotANumber)?;
    NonZeroU32::new(number).ok_or(DimensionError::NotPositive)
}

/// First character of `value` if it is printable ASCII (code point strictly
/// between 32 and 127).
pub fn accept_fill_char(value: &str) -> Option<char> {
    value
        .chars()
        .next()
        .filter(|c| (33..127).contains(&u32::from(*c)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Color,
    BlackAndWhite,
}

impl RenderMode {
    pub const BW_FLAG: &'static str = "BW";

    /// Only the exact `BW` literal selects black and white.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(Self::BW_FLAG) => RenderMode::BlackAndWhite,
            _ => RenderMode::Color,
        }
    }
}

/// Per-invocation rendering parameters.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub fill_char: char,
    pub target_width: NonZeroU32,
    pub target_height: NonZeroU32,
    pub mode: RenderMode,
    pub filter: FilterType,
}

impl RenderConfig {
    pub fn new(
        fill_char: char,
        target_width: NonZeroU32,
        target_height: NonZeroU32,
        mode: RenderMode,
    ) -> Self {
        Self {
            fill_char,
            target_width,
            target_height,
            mode,
            filter: FilterType::Lanczos3,
        }
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.default_char,
            settings.default_width,
            settings.default_height,
            RenderMode::Color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Use a mutex to ensure tests don't interfere with each other
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var(ENV_CHAR);
        std::env::remove_var(ENV_WIDTH);
        std::env::remove_var(ENV_HEIGHT);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_char, '█');
        assert_eq!(settings.default_width.get(), 60);
        assert_eq!(settings.default_height.get(), 30);
        assert_eq!(settings.supported_formats.len(), 19);
    }

    #[test]
    fn test_from_env_no_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let settings = Settings::from_env();
        assert_eq!(settings.default_char, CHAR_DEFAULT);
        assert_eq!(settings.default_width.get(), IMAGE_X_DEFAULT);
        assert_eq!(settings.default_height.get(), IMAGE_Y_DEFAULT);
    }

    #[test]
    fn test_from_env_with_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var(ENV_CHAR, "#");
        std::env::set_var(ENV_WIDTH, "80");
        std::env::set_var(ENV_HEIGHT, "40");

        let settings = Settings::from_env();
        assert_eq!(settings.default_char, '#');
        assert_eq!(settings.default_width.get(), 80);
        assert_eq!(settings.default_height.get(), 40);

        clear_env();
    }

    #[test]
    fn test_from_env_invalid_overrides_are_ignored() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var(ENV_CHAR, " ");
        std::env::set_var(ENV_WIDTH, "wide");
        std::env::set_var(ENV_HEIGHT, "0");

        let settings = Settings::from_env();
        assert_eq!(settings.default_char, CHAR_DEFAULT);
        assert_eq!(settings.default_width.get(), IMAGE_X_DEFAULT);
        assert_eq!(settings.default_height.get(), IMAGE_Y_DEFAULT);

        clear_env();
    }

    #[test]
    fn test_supported_extension_is_case_insensitive() {
        let settings = Settings::default();
        assert!(settings.is_supported_extension("png"));
        assert!(settings.is_supported_extension("PNG"));
        assert!(settings.is_supported_extension("JpEg"));
        assert!(settings.is_supported_extension("spider"));
        assert!(!settings.is_supported_extension("docx"));
        assert!(!settings.is_supported_extension("DOCX"));
        assert!(!settings.is_supported_extension(""));
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("60").map(NonZeroU32::get), Ok(60));
        assert_eq!(parse_dimension("007").map(NonZeroU32::get), Ok(7));
        assert_eq!(parse_dimension("0"), Err(DimensionError::NotPositive));
        assert_eq!(parse_dimension("abc"), Err(DimensionError::NotANumber));
        assert_eq!(parse_dimension("-5"), Err(DimensionError::NotANumber));
        assert_eq!(parse_dimension("+5"), Err(DimensionError::NotANumber));
        assert_eq!(parse_dimension(" 5"), Err(DimensionError::NotANumber));
        assert_eq!(parse_dimension("1.5"), Err(DimensionError::NotANumber));
        assert_eq!(parse_dimension(""), Err(DimensionError::NotANumber));
        assert_eq!(
            parse_dimension("99999999999999999999"),
            Err(DimensionError::NotANumber)
        );
    }

    #[test]
    fn test_accept_fill_char() {
        assert_eq!(accept_fill_char("A"), Some('A'));
        assert_eq!(accept_fill_char("#hash"), Some('#'));
        assert_eq!(accept_fill_char("!"), Some('!'));
        assert_eq!(accept_fill_char("~"), Some('~'));

        // Code points 32 and below, 127 and above are rejected
        assert_eq!(accept_fill_char(" "), None);
        assert_eq!(accept_fill_char("\u{1f}"), None);
        assert_eq!(accept_fill_char("\u{7f}"), None);
        assert_eq!(accept_fill_char("█"), None);
        assert_eq!(accept_fill_char(""), None);
    }

    #[test]
    fn test_render_mode_from_flag() {
        assert_eq!(RenderMode::from_flag(Some("BW")), RenderMode::BlackAndWhite);
        assert_eq!(RenderMode::from_flag(Some("bw")), RenderMode::Color);
        assert_eq!(RenderMode::from_flag(Some("BW ")), RenderMode::Color);
        assert_eq!(RenderMode::from_flag(None), RenderMode::Color);
    }

    #[test]
    fn test_render_config_from_settings() {
        let config = RenderConfig::from_settings(&Settings::default());
        assert_eq!(config.fill_char, CHAR_DEFAULT);
        assert_eq!(config.target_width.get(), 60);
        assert_eq!(config.target_height.get(), 30);
        assert_eq!(config.mode, RenderMode::Color);
        assert_eq!(config.filter, FilterType::Lanczos3);

        let nearest = config.with_filter(FilterType::Nearest);
        assert_eq!(nearest.filter, FilterType::Nearest);
    }
}

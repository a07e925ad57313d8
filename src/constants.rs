// src/constants.rs

/// Default name of the generated Fortran module.
pub const DEFAULT_MODULE_NAME: &str = "arrgen_arrays_mod";

/// Default name of the generated length constant.
pub const DEFAULT_LENGTH_NAME: &str = "ARRGEN_ALLN_TXT_LENGTH";

/// Default name of the generated array.
pub const DEFAULT_ARRAY_NAME: &str = "ARRGEN_ALLN_TXT";

/// Default indentation for array-body continuation lines.
pub const DEFAULT_INDENT: &str = "        ";

/// Whether literal tokens carry the `_1` kind suffix by default.
pub const DEFAULT_USE_SUFFIX: bool = true;

/// Default maximum length of an emitted physical line, continuation marker included.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;

/// Width of the widest literal token a byte can produce (`127_1`).
/// Config validation uses this to reject line widths no token fits on.
pub const MAX_TOKEN_WIDTH: usize = 5;

// src/constants.rs

/// The configuration key holding an explicit office installation directory.
pub const OFFICE_HOME_KEY: &str = "office.home";

/// The sentinel value of `office.home` that requests automatic discovery.
pub const DEFAULT_OFFICE_HOME_VALUE: &str = "default";

/// Product-specific override of the base directory.
pub const BIN_FOLDER_ENV: &str = "KKFILEVIEW_BIN_FOLDER";

/// Generic working-directory override, consulted after `KKFILEVIEW_BIN_FOLDER`.
pub const USER_DIR_ENV: &str = "user_dir";

/// The 64-bit program files root on a 64-bit Windows host.
pub const PROGRAM_FILES_ENV: &str = "ProgramFiles";

/// The 32-bit program files root on a 64-bit Windows host.
pub const PROGRAM_FILES_X86_ENV: &str = "ProgramFiles(x86)";

/// The name of the directory holding the application's configuration.
pub const CONFIG_DIR_NAME: &str = "config";

/// The name of the properties file read at startup (inside `config/`).
pub const CONFIG_FILENAME: &str = "application.properties";

/// Executable checked beneath each candidate on Windows.
pub const EXECUTABLE_WINDOWS: &str = "program/soffice.exe";

/// Executable checked on macOS bundles from LibreOffice 4.1 onwards.
pub const EXECUTABLE_MAC_41: &str = "MacOS/soffice";

/// Executable checked on older macOS bundles.
pub const EXECUTABLE_MAC: &str = "program/soffice";

/// Executable checked on Linux and other Unix-like systems.
pub const EXECUTABLE_DEFAULT: &str = "program/soffice.bin";

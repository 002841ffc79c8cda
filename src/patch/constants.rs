/// Application directory relative to the patcher root
pub const APP_DIR: &str = "resources/app";
/// Entry script that gets patched
pub const TARGET_FILENAME: &str = "main.js";
/// Suffix appended to the target filename for its backup
pub const BACKUP_SUFFIX: &str = ".backup";
/// Portable data directory, relative to the application directory
pub const DATA_DIR: &str = "data";
/// Subdirectories created inside the data directory
pub const DATA_SUBDIRS: [&str; 4] = ["logs", "crashes", "temp", "cache"];

/// Presence of this line in the target means it is patched
pub const PATCH_MARKER: &str = "const isPortable = true;";

/// Line after which the switches and portable config are inserted
pub const PATH_REQUIRE_ANCHOR: &str = r#"const path = require("node:path");"#;
/// Opening of the BrowserWindow preferences object
pub const WEB_PREFERENCES_ANCHOR: &str = "webPreferences: {";
/// Closing line of the preferences object
pub const WEB_PREFERENCES_CLOSING: &str = "\n    }";

pub const PERFORMANCE_SWITCHES: &str = r#"
// Performance optimizations
app.commandLine.appendSwitch('enable-features', 'SharedArrayBuffer,HighPriorityLoading');
app.commandLine.appendSwitch('disable-features', 'OutOfBlinkCors,CalculateNativeWinOcclusion');
app.commandLine.appendSwitch('disable-gpu-vsync');
app.commandLine.appendSwitch('ignore-gpu-blacklist');
app.commandLine.appendSwitch('enable-gpu-rasterization');
app.commandLine.appendSwitch('enable-zero-copy');
app.commandLine.appendSwitch('disable-http-cache', 'false');
"#;

pub const PORTABLE_CONFIG: &str = r#"
// Set up portable mode - store all data in the app directory
const isPortable = true; // Can be controlled by a config file later
if (isPortable) {
  const portableDir = path.join(__dirname, 'data');
  // Set all possible app paths to be portable
  app.setPath('userData', portableDir);
  app.setPath('logs', path.join(portableDir, 'logs'));
  app.setPath('crashDumps', path.join(portableDir, 'crashes'));
  app.setPath('temp', path.join(portableDir, 'temp'));
  app.setPath('cache', path.join(portableDir, 'cache'));

  // Ensure all directories exist
  [
    portableDir,
    path.join(portableDir, 'logs'),
    path.join(portableDir, 'crashes'),
    path.join(portableDir, 'temp'),
    path.join(portableDir, 'cache')
  ].forEach(dir => {
    if (!require('fs').existsSync(dir)) {
      require('fs').mkdirSync(dir, { recursive: true });
    }
  });

  // Disable automatic updates since we're in portable mode
  app.disableHardwareAcceleration(); // Prevent GPU issues in portable mode
  if (app.setLoginItemSettings) {
    app.setLoginItemSettings({ openAtLogin: false }); // Prevent auto-start
  }
}
"#;

pub const WINDOW_SETTINGS: &str = r#"
    backgroundThrottling: false,
    nodeIntegration: false,
    contextIsolation: true,
    enableRemoteModule: false,
    v8CacheOptions: "code",
    javascript: true,
    enableBlinkFeatures: 'HighPriorityLoading'
"#;

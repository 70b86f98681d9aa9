use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::{InventoryError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StockroomPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.home;
    match action {
        ConfigAction::ShowAll => {
            let config = StockroomConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = StockroomConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = StockroomConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                let text = match e {
                    InventoryError::Config(msg) => msg,
                    other => other.to_string(),
                };
                result.add_message(CmdMessage::error(text));
                return Ok(result);
            }
            config.save(dir)?;

            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> StockroomPaths {
        StockroomPaths {
            home: dir.path().to_path_buf(),
            data_file: dir.path().join("inventory.csv"),
        }
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        run(
            &paths,
            ConfigAction::Set("low-stock-threshold".into(), "4".into()),
        )
        .unwrap();

        let shown = run(&paths, ConfigAction::ShowAll).unwrap();
        assert!(shown.config.is_some());
        assert_eq!(shown.config.unwrap().low_stock_threshold, 4);
    }

    #[test]
    fn set_reports_only_the_changed_key() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::Set("currency".into(), "€".into())).unwrap();

        assert!(result.config.is_none());
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
        assert_eq!(result.messages[0].content, "currency set to €");
    }

    #[test]
    fn bad_value_is_reported_not_raised() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &paths(&dir),
            ConfigAction::Set("low-stock-threshold".into(), "many".into()),
        )
        .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.config.is_none());
    }

    #[test]
    fn show_unknown_key_is_an_error_message() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("colour".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}

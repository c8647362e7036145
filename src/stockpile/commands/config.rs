use crate::commands::{CmdMessage, CmdResult, StockPaths};
use crate::config::StockConfig;
use crate::error::{Result, StockError};
use crate::store::StorageFormat;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetFormat(StorageFormat),
    SetDataFile(String),
}

pub fn run(paths: &StockPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StockConfig::load(&paths.home)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result = result.with_config(config);
        }
        ConfigAction::ShowKey(key) => match key.as_str() {
            "format" => result.add_message(CmdMessage::info(format!("format = {}", config.format))),
            "data-file" => result.add_message(CmdMessage::info(format!(
                "data-file = {}",
                config.data_path(&paths.home).display()
            ))),
            other => {
                return Err(StockError::Config(format!("Unknown config key: {}", other)));
            }
        },
        ConfigAction::SetFormat(format) => {
            config.format = format;
            config.save(&paths.home)?;
            result.add_message(CmdMessage::success(format!("format set to {}", format)));
            result = result.with_config(config);
        }
        ConfigAction::SetDataFile(file) => {
            config.set_data_file(&file)?;
            config.save(&paths.home)?;
            result.add_message(CmdMessage::success(format!(
                "data-file set to {}",
                config.data_path(&paths.home).display()
            )));
            result = result.with_config(config);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_format_persists() {
        let dir = TempDir::new().unwrap();
        let paths = StockPaths::new(dir.path());

        run(&paths, ConfigAction::SetFormat(StorageFormat::Text)).unwrap();
        let shown = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().format, StorageFormat::Text);
    }

    #[test]
    fn show_key_reports_resolved_data_file() {
        let dir = TempDir::new().unwrap();
        let paths = StockPaths::new(dir.path());

        run(&paths, ConfigAction::SetDataFile("shop.json".into())).unwrap();
        let shown = run(&paths, ConfigAction::ShowKey("data-file".into())).unwrap();
        assert!(shown.messages[0].content.ends_with("shop.json"));
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let paths = StockPaths::new(dir.path());
        let err = run(&paths, ConfigAction::ShowKey("colour".into())).unwrap_err();
        assert!(matches!(err, StockError::Config(msg) if msg.contains("colour")));
    }
}

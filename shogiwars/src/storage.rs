//! 应用目录与数据存储
//!
//! 对局索引以 JSON 保存在 `<appdir>/data.json`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::entities::AppData;

/// 数据文件名
pub const DATA_FILE_NAME: &str = "data.json";

/// 应用目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDir(PathBuf);

impl AppDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// 确保目录存在
    pub fn init(&self) -> Result<()> {
        if !self.0.exists() {
            fs::create_dir_all(&self.0)
                .with_context(|| format!("无法创建应用目录: {:?}", self.0))?;
        }
        Ok(())
    }

    /// 数据文件路径
    pub fn data_json_path(&self) -> PathBuf {
        self.0.join(DATA_FILE_NAME)
    }

    /// 加载数据，文件不存在时返回空数据
    pub fn load_data(&self) -> Result<AppData> {
        let path = self.data_json_path();
        if !path.exists() {
            debug!("数据文件不存在，使用空数据: {:?}", path);
            return Ok(AppData::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("读取文件失败: {:?}", path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("解析数据文件失败: {:?}", path))
    }

    /// 保存数据
    pub fn save_data(&self, data: &AppData) -> Result<()> {
        let path = self.data_json_path();
        let json_content = serde_json::to_string_pretty(data)
            .context("序列化数据失败")?;

        fs::write(&path, json_content)
            .with_context(|| format!("写入文件失败: {:?}", path))?;

        debug!("已保存 {} 条记录到 {:?}", data.record_items.len(), path);
        Ok(())
    }

    /// 目录路径
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{GameType, Player, RecordId, RecordItem};
    use tempfile::TempDir;

    fn create_test_dir() -> (AppDir, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let app_dir = AppDir::new(temp_dir.path().join("nested").join(".shogiwars"));
        (app_dir, temp_dir)
    }

    #[test]
    fn test_init_creates_directory() {
        let (app_dir, _temp_dir) = create_test_dir();
        assert!(!app_dir.path().exists());
        app_dir.init().unwrap();
        assert!(app_dir.path().is_dir());
        // 重复初始化不报错
        app_dir.init().unwrap();
    }

    #[test]
    fn test_load_missing_is_empty() {
        let (app_dir, _temp_dir) = create_test_dir();
        let data = app_dir.load_data().unwrap();
        assert!(data.record_items.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let (app_dir, _temp_dir) = create_test_dir();
        app_dir.init().unwrap();

        let mut item = RecordItem::new(GameType::ThreeMinutes);
        item.record_id = RecordId::from("alice-bob-20180305_201530");
        item.players.black = Player::new("alice", "初段");
        item.players.white = Player::new("bob", "1級");
        item.winner = "bob".to_string();

        let data = AppData {
            record_items: vec![item],
        };
        app_dir.save_data(&data).unwrap();
        assert!(app_dir.data_json_path().ends_with("data.json"));

        let loaded = app_dir.load_data().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_load_corrupted_file() {
        let (app_dir, _temp_dir) = create_test_dir();
        app_dir.init().unwrap();
        fs::write(app_dir.data_json_path(), "{not json").unwrap();
        assert!(app_dir.load_data().is_err());
    }

    #[test]
    fn test_save_without_init_fails() {
        let (app_dir, _temp_dir) = create_test_dir();
        assert!(app_dir.save_data(&AppData::default()).is_err());
    }
}

use crate::errors::{ProjectDataError, ProjectDataResult};
use schema::{
    CharacterId, CharacterTemplate, EnemyId, EnemyTemplate, ItemData, ItemId, SkillData, SkillId,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The immutable project/template tables the engine reads from: character
/// and enemy templates plus the skill and item catalogs, all queried by
/// integer id. The engine never mutates this data.
#[derive(Debug, Clone, Default)]
pub struct ProjectData {
    characters: HashMap<CharacterId, CharacterTemplate>,
    enemies: HashMap<EnemyId, EnemyTemplate>,
    skills: HashMap<SkillId, SkillData>,
    items: HashMap<ItemId, ItemData>,
}

impl ProjectData {
    /// Create an empty project. Templates are added with the `insert_*`
    /// methods or loaded in bulk with [`ProjectData::load_from_dir`].
    pub fn new() -> Self {
        Self::default()
    }

    // === Table building ===

    pub fn insert_character(&mut self, id: CharacterId, template: CharacterTemplate) {
        self.characters.insert(id, template);
    }

    pub fn insert_enemy(&mut self, id: EnemyId, template: EnemyTemplate) {
        self.enemies.insert(id, template);
    }

    pub fn insert_skill(&mut self, id: SkillId, skill: SkillData) {
        self.skills.insert(id, skill);
    }

    pub fn insert_item(&mut self, id: ItemId, item: ItemData) {
        self.items.insert(id, item);
    }

    // === Queried-by-id accessors ===

    pub fn character(&self, id: CharacterId) -> ProjectDataResult<&CharacterTemplate> {
        self.characters
            .get(&id)
            .ok_or(ProjectDataError::CharacterNotFound(id))
    }

    pub fn enemy(&self, id: EnemyId) -> ProjectDataResult<&EnemyTemplate> {
        self.enemies
            .get(&id)
            .ok_or(ProjectDataError::EnemyNotFound(id))
    }

    pub fn skill(&self, id: SkillId) -> ProjectDataResult<&SkillData> {
        self.skills.get(&id).ok_or(ProjectDataError::SkillNotFound(id))
    }

    pub fn item(&self, id: ItemId) -> ProjectDataResult<&ItemData> {
        self.items.get(&id).ok_or(ProjectDataError::ItemNotFound(id))
    }

    /// Load a full project from a data directory laid out as
    /// `characters/`, `enemies/`, `skills/` and `items/` subdirectories of
    /// RON files named `NNN-some-name.ron`, where the numeric prefix is the
    /// table id.
    pub fn load_from_dir(data_path: &Path) -> Result<ProjectData, Box<dyn std::error::Error>> {
        let mut project = ProjectData::new();

        for (id, template) in load_table::<CharacterTemplate>(&data_path.join("characters"))? {
            project.characters.insert(id, template);
        }
        for (id, template) in load_table::<EnemyTemplate>(&data_path.join("enemies"))? {
            project.enemies.insert(id, template);
        }
        for (id, skill) in load_table::<SkillData>(&data_path.join("skills"))? {
            project.skills.insert(id, skill);
        }
        for (id, item) in load_table::<ItemData>(&data_path.join("items"))? {
            project.items.insert(id, item);
        }

        Ok(project)
    }
}

/// Read every RON file in one table directory, deriving each row's id from
/// the filename. Format: "001-slime.ron" -> id 1.
fn load_table<T: DeserializeOwned>(dir: &Path) -> Result<Vec<(u32, T)>, Box<dyn std::error::Error>> {
    if !dir.exists() {
        return Err(format!("Data directory not found: {}", dir.display()).into());
    }

    let mut rows = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            if let Some(filename) = path.file_stem().and_then(|s| s.to_str()) {
                let id: u32 = filename
                    .split('-')
                    .next()
                    .and_then(|prefix| prefix.parse().ok())
                    .ok_or_else(|| format!("Missing numeric id prefix: {}", path.display()))?;

                let content = fs::read_to_string(&path)?;
                rows.push((id, ron::from_str(&content)?));
            }
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod project_loading_tests {
    use super::*;

    #[test]
    fn test_load_demo_project() {
        let project = ProjectData::load_from_dir(Path::new("data"))
            .expect("demo data directory should load cleanly");

        // The demo data ships two characters, three enemies, and catalogs
        // big enough to cover every reference between them.
        let roland = project.character(1).expect("character 1");
        assert_eq!(roland.name, "Roland");
        assert!(project.character(2).is_ok());

        let slime = project.enemy(1).expect("enemy 1");
        assert_eq!(slime.name, "Slime");

        // Every attack skill and known skill referenced by a template must
        // resolve in the skill catalog.
        for id in 1..=2 {
            let character = project.character(id).unwrap();
            assert!(project.skill(character.attack_skill).is_ok());
            for skill in character.skills_at(99) {
                assert!(project.skill(skill).is_ok());
            }
        }
        for id in 1..=3 {
            let enemy = project.enemy(id).unwrap();
            assert!(project.skill(enemy.attack_skill).is_ok());
            for &skill in &enemy.skills {
                assert!(project.skill(skill).is_ok());
            }
            for drop in &enemy.drops {
                assert!(project.item(drop.item).is_ok());
            }
        }
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = ProjectData::load_from_dir(Path::new("no-such-data-dir"));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let project = ProjectData::new();
        assert!(project.character(42).is_err());
        assert!(project.enemy(42).is_err());
        assert!(project.skill(42).is_err());
        assert!(project.item(42).is_err());
    }
}

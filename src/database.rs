/// Source of the varieties a session starts with.
pub struct Database {
    varieties: Vec<String>,
}

impl Database {
    pub fn new() -> Self {
        let varieties = [
            "Russet Burbank",
            "Yukon Gold",
            "Red Bliss",
            "Kennebec",
            "Maris Piper",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        Self { varieties }
    }

    pub fn potato_varieties(&self) -> &[String] {
        &self.varieties
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_varieties_in_order() {
        let db = Database::new();
        assert_eq!(
            db.potato_varieties(),
            ["Russet Burbank", "Yukon Gold", "Red Bliss", "Kennebec", "Maris Piper"]
        );
    }
}

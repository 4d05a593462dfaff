// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures and sample SQL statements

use sqlhint_schema::LocalSchema;

/// Sample SQL statements for completion tests
pub struct SqlFixtures;

impl SqlFixtures {
    // ===== Alias extraction =====

    /// Explicit and bare aliases in one statement
    pub const fn aliased_join() -> &'static str {
        "SELECT o.id FROM orders o JOIN customers AS c ON o.customer_id = c.id"
    }

    /// Reference followed by a keyword that must not become an alias
    pub const fn keyword_after_reference() -> &'static str {
        "SELECT * FROM orders on"
    }

    /// Same alias bound twice, the later reference wins
    pub const fn rebound_alias() -> &'static str {
        "SELECT * FROM orders x JOIN customers x ON x.id = x.id"
    }

    /// UPDATE statement with a bare alias
    pub const fn aliased_update() -> &'static str {
        "UPDATE users u SET u.name = 'x' WHERE u.id = 1"
    }

    /// Namespace-qualified reference with an alias
    pub const fn qualified_reference() -> &'static str {
        "SELECT d.id FROM pg_d1.orders d"
    }

    // ===== Comment handling =====

    /// Line comment hiding a fake reference
    pub const fn line_commented_reference() -> &'static str {
        "SELECT * FROM orders o -- JOIN bogus b\nWHERE o.id = 1"
    }

    /// Block comment hiding a fake reference
    pub const fn block_commented_reference() -> &'static str {
        "SELECT * /* JOIN bogus b */ FROM orders o"
    }

    // ===== Multi-line statements =====

    /// JOIN spread over several lines
    pub const fn multiline_join() -> &'static str {
        "SELECT o.id, c.name\nFROM orders o\nJOIN customers AS c\n  ON o.customer_id = c.id"
    }
}

/// Local schema with the standard pipeline tables
pub fn standard_local_schema() -> LocalSchema {
    LocalSchema::new()
        .with_table("orders", ["id", "customer_id", "amount", "created_at"])
        .with_table("customers", ["id", "name", "email"])
        .with_table("events", ["id", "ts", "payload"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_local_schema_tables() {
        let schema = standard_local_schema();

        assert_eq!(schema.len(), 3);
        assert!(schema.contains("orders"));
        assert!(schema.contains("customers"));
        assert!(schema.contains("events"));
    }

    #[test]
    fn test_fixtures_are_plain_sql() {
        assert!(SqlFixtures::aliased_join().contains("FROM orders"));
        assert!(SqlFixtures::multiline_join().contains('\n'));
    }
}

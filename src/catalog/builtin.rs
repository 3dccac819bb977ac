use crate::{Profile, db::table::DataStore};

/// Static description of one simulated data system.
///
/// A definition is pure data: a [`Profile`](crate::Profile) built from it
/// owns a working copy of the seed rows and carries all the CRUD behavior.
/// Adding a data system means adding an entry to [`BUILTIN_PROFILES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileDefinition {
    /// Unique key, shown in the profile chooser.
    pub name: &'static str,

    /// Long display name.
    pub title: &'static str,

    /// One-line scenario label.
    pub use_case: &'static str,

    /// Explanation of why the paradigm suits the scenario.
    pub rationale: &'static str,

    /// Ordered column names.
    pub columns: &'static [&'static str],

    /// Rows present when the profile is first built.
    pub seed: &'static [&'static [&'static str]],
}

/// The data systems available at startup, in chooser order.
///
/// The first entry is the default active profile.
pub const BUILTIN_PROFILES: [ProfileDefinition; 4] = [
    ProfileDefinition {
        name: "PostgreSQL",
        title: "PostgreSQL",
        use_case: "Sistema Financeiro/Contábil",
        rationale: "Por que PostgreSQL?\n\n\
            O Postgres é um banco Relacional (SQL) robusto e ACID-compliant.\n\
            Para sistemas financeiros, a integridade dos dados e transações seguras são cruciais. \
            Relacionamentos rígidos garantem que não existam pagamentos órfãos sem fatura.",
        columns: &["ID Transação", "Descrição", "Status"],
        seed: &[
            &["1001", "Fatura Energia", "Pendente"],
            &["1002", "Pagamento Fornecedor", "Pago"],
        ],
    },
    ProfileDefinition {
        name: "MongoDB",
        title: "MongoDB",
        use_case: "Gestão de Produtos (Mercado)",
        rationale: "Por que MongoDB?\n\n\
            O MongoDB é um banco NoSQL orientado a documentos (JSON).\n\
            Para um mercado, produtos podem ter atributos variados (ex: uma TV tem voltagem, \
            uma fruta tem validade). O esquema flexível do Mongo é ideal para catálogos complexos \
            onde os dados não seguem uma tabela rígida.",
        columns: &["ID", "Produto", "Preço"],
        seed: &[&["1", "Arroz 5kg", "R$ 25.00"], &["2", "Feijão", "R$ 8.50"]],
    },
    ProfileDefinition {
        name: "Firebase",
        title: "Firebase (Firestore)",
        use_case: "Sistema de Funcionários (Tempo Real)",
        rationale: "Por que Firebase?\n\n\
            O Firebase brilha em sincronização em tempo real.\n\
            Para um sistema de funcionários onde múltiplos gerentes podem editar escalas \
            ou dados simultaneamente, o Firebase atualiza a tela de todos instantaneamente \
            sem precisar recarregar (via WebSockets/Listeners).",
        columns: &["ID", "Nome", "Departamento"],
        seed: &[
            &["FUNC-01", "Ana Silva", "TI"],
            &["FUNC-02", "Carlos Souza", "RH"],
        ],
    },
    ProfileDefinition {
        name: "Couchbase",
        title: "Couchbase",
        use_case: "Cache de Sessão / Alta Performance",
        rationale: "Por que Couchbase?\n\n\
            O Couchbase é um banco Key-Value e Document Store focado em performance extrema.\n\
            Ideal para armazenar sessões de usuário, carrinhos de compra temporários ou cache, \
            onde a velocidade de leitura/escrita na memória é mais importante que relacionamentos complexos.",
        columns: &["Key (Chave)", "Usuário", "Estado"],
        seed: &[
            &["Sessao_998", "User_X", "Ativa"],
            &["Sessao_999", "User_Y", "Expirada"],
        ],
    },
];

/// Looks up a built-in definition by name.
pub fn find(name: &str) -> Option<&'static ProfileDefinition> {
    BUILTIN_PROFILES.iter().find(|def| def.name == name)
}

/// Builds a fresh store for every built-in definition, in chooser order.
pub fn builtin_stores() -> Vec<Box<dyn DataStore>> {
    BUILTIN_PROFILES
        .iter()
        .map(|def| Box::new(Profile::from_definition(def)) as Box<dyn DataStore>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        for (i, def) in BUILTIN_PROFILES.iter().enumerate() {
            assert!(
                BUILTIN_PROFILES[i + 1..].iter().all(|other| other.name != def.name),
                "duplicate profile name {}",
                def.name
            );
        }
    }

    #[test]
    fn test_seed_rows_match_columns() {
        for def in &BUILTIN_PROFILES {
            assert_eq!(def.seed.len(), 2, "{} should have two seed rows", def.name);
            for row in def.seed {
                assert_eq!(row.len(), def.columns.len(), "bad seed row in {}", def.name);
            }
        }
    }

    #[test]
    fn test_builtin_stores_follow_catalog_order() {
        let names: Vec<String> = builtin_stores()
            .iter()
            .map(|store| store.name().to_string())
            .collect();

        assert_eq!(names, ["PostgreSQL", "MongoDB", "Firebase", "Couchbase"]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("Firebase").map(|def| def.title), Some("Firebase (Firestore)"));
        assert!(find("firebase").is_none());
        assert!(find("Oracle").is_none());
    }
}

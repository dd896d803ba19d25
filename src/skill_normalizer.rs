use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Alias → forma canônica (lookup O(1)).
///
/// NOTE: manter em sincronia com a tabela SKILL_ALIASES da documentação do produto.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        (
            "javascript",
            &["js", "javascript", "java script", "ecmascript", "es6"],
        ),
        ("typescript", &["ts", "typescript", "type script"]),
        ("nodejs", &["node.js", "node js", "nodejs", "node"]),
        ("react", &["reactjs", "react.js", "react js", "react"]),
        ("vue", &["vue.js", "vuejs", "vue js", "vue"]),
        ("angular", &["angularjs", "angular.js", "angular"]),
        ("python", &["python", "python3", "py"]),
        ("java", &["java", "java8", "java11", "java17"]),
        ("csharp", &["c#", "csharp", ".net c#"]),
        ("dotnet", &[".net", "dotnet", "dot net", ".net core", "aspnet"]),
        ("golang", &["go", "golang", "go lang"]),
        ("rust", &["rust", "rustlang"]),
        ("php", &["php", "php7", "php8"]),
        ("ruby", &["ruby", "ruby on rails", "rails", "ror"]),
        ("kotlin", &["kotlin"]),
        ("swift", &["swift", "swiftui"]),
        ("sql", &["sql", "banco de dados relacional"]),
        ("postgresql", &["postgres", "postgresql", "psql"]),
        ("mysql", &["mysql", "mariadb"]),
        ("mongodb", &["mongo", "mongodb"]),
        ("aws", &["aws", "amazon web services"]),
        ("azure", &["azure", "microsoft azure"]),
        ("gcp", &["gcp", "google cloud", "google cloud platform"]),
        ("docker", &["docker", "containers docker"]),
        ("kubernetes", &["k8s", "kubernetes", "kube"]),
        ("terraform", &["terraform", "iac terraform"]),
        ("git", &["git", "github", "gitlab"]),
        ("scrum", &["scrum", "metodologia agil", "agil", "agile"]),
        (
            "gestao de projetos",
            &["gestao de projetos", "gerencia de projetos", "pmo"],
        ),
        (
            "atendimento ao cliente",
            &["atendimento ao cliente", "atendimento", "suporte ao cliente"],
        ),
        ("excel", &["excel", "planilhas", "microsoft excel"]),
        ("power bi", &["power bi", "powerbi"]),
        (
            "comunicacao",
            &["comunicacao", "comunicacao interpessoal", "oratoria"],
        ),
        ("vendas", &["vendas", "comercial", "inside sales"]),
        ("marketing digital", &["marketing digital", "marketing", "growth"]),
        ("design grafico", &["design grafico", "design", "designer grafico"]),
        ("ux", &["ux", "ux design", "user experience", "ux/ui"]),
    ];

    let mut map = HashMap::new();
    for (canonical, list) in aliases {
        for alias in list.iter() {
            map.insert(*alias, *canonical);
        }
    }
    map
});

static CANONICAL_SKILLS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ALIAS_TO_CANONICAL.values().copied().collect());

/// Minúsculas + remoção de diacríticos (NFD, descarta combining marks).
/// "Programação Orientada a Objetos" → "programacao orientada a objetos".
pub fn fold(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Forma canônica de uma habilidade: fold → tabela de aliases → tolerância a
/// erro de digitação de 1 caractere contra o vocabulário canônico
/// ("phyton" → "python"). Sem correspondência, devolve a forma folded.
pub fn canonicalize(raw: &str) -> String {
    let folded = fold(raw);
    if folded.is_empty() {
        return folded;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(folded.as_str()) {
        return (*canonical).to_string();
    }

    // Fuzzy só para termos não triviais; "go"/"ux" a 1 edição de distância
    // colidiriam com termos não relacionados.
    if folded.len() >= 5 {
        for canonical in CANONICAL_SKILLS.iter() {
            if damerau_levenshtein(&folded, canonical) == 1 {
                return (*canonical).to_string();
            }
        }
    }

    folded
}

/// Normaliza uma lista de habilidades em um conjunto canônico, descartando
/// entradas vazias e duplicatas.
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|s| canonicalize(s))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Correspondência exata-ou-contida entre duas habilidades já canônicas.
/// "aws lambda" cobre o requisito "aws"; a contenção exige termo de ao menos
/// 3 caracteres para não casar siglas soltas.
pub fn skill_matches(candidate: &str, required: &str) -> bool {
    if candidate == required {
        return true;
    }
    if required.len() >= 3 && candidate.contains(required) {
        return true;
    }
    candidate.len() >= 3 && required.contains(candidate)
}

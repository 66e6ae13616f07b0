//! Text clean-up applied once while loading.
//!
//! Two historical revisions of the source file spell the same headers with and
//! without accents (`PONTUAÇÃO` / `PONTUACAO`), and one of them calls the city
//! column `CAMPUS`. Headers are folded here so the rest of the crate only ever
//! sees [`SourceField`]s.

// ---------------------------------------------------------------------------
// Source fields
// ---------------------------------------------------------------------------

/// A column the loader knows how to read from a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceField {
    University,
    Course,
    City,
    VacancyCode,
    Sex,
    Score,
}

impl SourceField {
    pub const ALL: [SourceField; 6] = [
        SourceField::University,
        SourceField::Course,
        SourceField::City,
        SourceField::VacancyCode,
        SourceField::Sex,
        SourceField::Score,
    ];

    /// Resolve a raw header name, tolerating accent and case drift.
    pub fn from_header(header: &str) -> Option<Self> {
        match fold_header(header).as_str() {
            "UNIVERSIDADE" | "INSTITUICAO" => Some(SourceField::University),
            "CURSO" => Some(SourceField::Course),
            "CIDADE" | "CAMPUS" => Some(SourceField::City),
            "VAGA CLASSIFICACAO" | "VAGA" => Some(SourceField::VacancyCode),
            "SEXO" => Some(SourceField::Sex),
            "PONTUACAO" | "NOTA" => Some(SourceField::Score),
            _ => None,
        }
    }

    /// Canonical header, as written by the current dataset revision.
    pub fn header(self) -> &'static str {
        match self {
            SourceField::University => "UNIVERSIDADE",
            SourceField::Course => "CURSO",
            SourceField::City => "CIDADE",
            SourceField::VacancyCode => "VAGA CLASSIFICAÇÃO",
            SourceField::Sex => "SEXO",
            SourceField::Score => "PONTUAÇÃO",
        }
    }

    /// Optional columns are filled with an empty string when absent.
    pub fn is_required(self) -> bool {
        !matches!(self, SourceField::University | SourceField::VacancyCode)
    }
}

/// Uppercase, strip accents and BOM, treat `_` as a space, collapse whitespace.
pub fn fold_header(header: &str) -> String {
    let folded: String = header
        .trim_start_matches('\u{feff}')
        .chars()
        .map(|c| if c == '_' { ' ' } else { fold_accent(c) })
        .collect();
    collapse_whitespace(&folded).to_uppercase()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Cell values
// ---------------------------------------------------------------------------

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Course names arrive in mixed case, with stray spaces and with a few words
/// typed without their accents. Each word is corrected independently.
pub fn normalize_course(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let upper = word.to_uppercase();
            match course_word_synonym(&upper) {
                Some(fixed) => fixed.to_string(),
                None => upper,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn course_word_synonym(word: &str) -> Option<&'static str> {
    let fixed = match word {
        "LIC." | "LIC" => "LICENCIATURA",
        "ENG." | "ENG" => "ENGENHARIA",
        "ADMINISTRACAO" => "ADMINISTRAÇÃO",
        "BIOLOGICAS" => "BIOLÓGICAS",
        "CIENCIA" => "CIÊNCIA",
        "CIENCIAS" => "CIÊNCIAS",
        "COMPUTACAO" | "COMPUTAÇAO" | "COMPUTACÃO" => "COMPUTAÇÃO",
        "CONTABEIS" => "CONTÁBEIS",
        "EDUCACAO" | "EDUCAÇAO" => "EDUCAÇÃO",
        "ELETRICA" => "ELÉTRICA",
        "FARMACIA" => "FARMÁCIA",
        "FISICA" => "FÍSICA",
        "HISTORIA" => "HISTÓRIA",
        "INFORMACAO" | "INFORMAÇAO" => "INFORMAÇÃO",
        "MATEMATICA" => "MATEMÁTICA",
        "MECANICA" => "MECÂNICA",
        "MUSICA" => "MÚSICA",
        "NUTRICAO" | "NUTRIÇAO" => "NUTRIÇÃO",
        "PORTUGUES" => "PORTUGUÊS",
        "PRODUCAO" | "PRODUÇAO" => "PRODUÇÃO",
        "QUIMICA" => "QUÍMICA",
        "SERVICO" => "SERVIÇO",
        "VETERINARIA" => "VETERINÁRIA",
        _ => return None,
    };
    Some(fixed)
}

/// Short categorical codes (`SEXO`, `VAGA CLASSIFICAÇÃO`).
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_resolve_with_and_without_accents() {
        assert_eq!(SourceField::from_header("PONTUAÇÃO"), Some(SourceField::Score));
        assert_eq!(SourceField::from_header("PONTUACAO"), Some(SourceField::Score));
        assert_eq!(
            SourceField::from_header("VAGA CLASSIFICAÇÃO"),
            Some(SourceField::VacancyCode)
        );
        assert_eq!(
            SourceField::from_header(" vaga_classificacao "),
            Some(SourceField::VacancyCode)
        );
        assert_eq!(SourceField::from_header("\u{feff}CURSO"), Some(SourceField::Course));
        assert_eq!(SourceField::from_header("CAMPUS"), Some(SourceField::City));
        assert_eq!(SourceField::from_header("AREA"), None);
    }

    #[test]
    fn course_names_are_upcased_collapsed_and_corrected() {
        assert_eq!(
            normalize_course("  licenciatura em   matematica "),
            "LICENCIATURA EM MATEMÁTICA"
        );
        assert_eq!(normalize_course("Ciencia da Computaçao"), "CIÊNCIA DA COMPUTAÇÃO");
        assert_eq!(normalize_course("Lic. em Física"), "LICENCIATURA EM FÍSICA");
        assert_eq!(normalize_course("MEDICINA"), "MEDICINA");
        assert_eq!(normalize_course("   "), "");
    }

    #[test]
    fn codes_are_trimmed_and_upcased() {
        assert_eq!(normalize_code(" f "), "F");
        assert_eq!(normalize_code(""), "");
    }
}

//! Fixed dictionaries used for display: vacancy code → label and
//! course → academic area.
//!
//! Both lookups are total. Unknown vacancy codes come back unchanged and
//! unknown courses have no area; neither is an error.

/// Code of the open-competition track (no quota).
pub const OPEN_COMPETITION: &str = "A";

const VACANCY_LABELS: &[(&str, &str)] = &[
    ("A", "Ampla concorrência"),
    ("B", "Escola pública"),
    ("C", "Escola pública, renda ≤ 1,5 SM"),
    ("D", "Escola pública, PPI"),
    ("E", "Escola pública, renda ≤ 1,5 SM, PPI"),
    ("F", "Escola pública, PcD"),
    ("G", "Escola pública, renda ≤ 1,5 SM, PcD"),
    ("H", "Escola pública, PPI, PcD"),
    ("I", "Escola pública, renda ≤ 1,5 SM, PPI, PcD"),
    ("J", "Pessoa com deficiência"),
];

/// Human label for a vacancy code, or the code itself when unknown.
pub fn vacancy_label(code: &str) -> &str {
    VACANCY_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// Whether a vacancy code is the open-competition track.
///
/// Older exports spelled the track `AC` inside a longer code; those count too.
pub fn is_open_competition(code: &str) -> bool {
    code == OPEN_COMPETITION || code.contains("AC")
}

// ---------------------------------------------------------------------------
// Course → area
// ---------------------------------------------------------------------------

pub const AREA_EDUCATION: &str = "Educação";
pub const AREA_EXACT: &str = "Ciências Exatas";
pub const AREA_ENGINEERING: &str = "Engenharias";
pub const AREA_HEALTH: &str = "Ciências da Saúde";
pub const AREA_HUMANITIES: &str = "Ciências Humanas";
pub const AREA_APPLIED_SOCIAL: &str = "Ciências Sociais Aplicadas";
pub const AREA_BIOLOGICAL: &str = "Ciências Biológicas";
pub const AREA_AGRARIAN: &str = "Ciências Agrárias";
pub const AREA_LANGUAGES: &str = "Linguística, Letras e Artes";

// Keys are already normalized (see `normalize::normalize_course`).
const COURSE_AREAS: &[(&str, &str)] = &[
    ("PEDAGOGIA", AREA_EDUCATION),
    ("LICENCIATURA EM MATEMÁTICA", AREA_EDUCATION),
    ("LICENCIATURA EM FÍSICA", AREA_EDUCATION),
    ("LICENCIATURA EM QUÍMICA", AREA_EDUCATION),
    ("LICENCIATURA EM CIÊNCIAS BIOLÓGICAS", AREA_EDUCATION),
    ("LICENCIATURA EM HISTÓRIA", AREA_EDUCATION),
    ("LICENCIATURA EM GEOGRAFIA", AREA_EDUCATION),
    ("LICENCIATURA EM LETRAS", AREA_EDUCATION),
    ("MATEMÁTICA", AREA_EXACT),
    ("FÍSICA", AREA_EXACT),
    ("QUÍMICA", AREA_EXACT),
    ("ESTATÍSTICA", AREA_EXACT),
    ("CIÊNCIA DA COMPUTAÇÃO", AREA_EXACT),
    ("SISTEMAS DE INFORMAÇÃO", AREA_EXACT),
    ("ENGENHARIA CIVIL", AREA_ENGINEERING),
    ("ENGENHARIA DE COMPUTAÇÃO", AREA_ENGINEERING),
    ("ENGENHARIA ELÉTRICA", AREA_ENGINEERING),
    ("ENGENHARIA MECÂNICA", AREA_ENGINEERING),
    ("ENGENHARIA DE PRODUÇÃO", AREA_ENGINEERING),
    ("ENGENHARIA QUÍMICA", AREA_ENGINEERING),
    ("MEDICINA", AREA_HEALTH),
    ("ENFERMAGEM", AREA_HEALTH),
    ("ODONTOLOGIA", AREA_HEALTH),
    ("FARMÁCIA", AREA_HEALTH),
    ("NUTRIÇÃO", AREA_HEALTH),
    ("FISIOTERAPIA", AREA_HEALTH),
    ("EDUCAÇÃO FÍSICA", AREA_HEALTH),
    ("HISTÓRIA", AREA_HUMANITIES),
    ("GEOGRAFIA", AREA_HUMANITIES),
    ("PSICOLOGIA", AREA_HUMANITIES),
    ("FILOSOFIA", AREA_HUMANITIES),
    ("CIÊNCIAS SOCIAIS", AREA_HUMANITIES),
    ("DIREITO", AREA_APPLIED_SOCIAL),
    ("ADMINISTRAÇÃO", AREA_APPLIED_SOCIAL),
    ("CIÊNCIAS CONTÁBEIS", AREA_APPLIED_SOCIAL),
    ("CIÊNCIAS ECONÔMICAS", AREA_APPLIED_SOCIAL),
    ("ARQUITETURA E URBANISMO", AREA_APPLIED_SOCIAL),
    ("SERVIÇO SOCIAL", AREA_APPLIED_SOCIAL),
    ("JORNALISMO", AREA_APPLIED_SOCIAL),
    ("CIÊNCIAS BIOLÓGICAS", AREA_BIOLOGICAL),
    ("BIOMEDICINA", AREA_BIOLOGICAL),
    ("AGRONOMIA", AREA_AGRARIAN),
    ("MEDICINA VETERINÁRIA", AREA_AGRARIAN),
    ("ZOOTECNIA", AREA_AGRARIAN),
    ("ENGENHARIA FLORESTAL", AREA_AGRARIAN),
    ("LETRAS", AREA_LANGUAGES),
    ("LETRAS - PORTUGUÊS", AREA_LANGUAGES),
    ("MÚSICA", AREA_LANGUAGES),
    ("ARTES VISUAIS", AREA_LANGUAGES),
];

/// Broad academic area of a normalized course name.
pub fn area_for_course(course: &str) -> Option<&'static str> {
    COURSE_AREAS
        .iter()
        .find(|(known, _)| *known == course)
        .map(|(_, area)| *area)
}

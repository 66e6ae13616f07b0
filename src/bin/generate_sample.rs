use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

struct Row {
    university: String,
    course: String,
    city: String,
    vacancy: String,
    sex: String,
    score: Option<f64>,
}

/// (university, city, courses offered there)
const CAMPUSES: &[(&str, &str, &[&str])] = &[
    (
        "Universidade Federal do Norte",
        "Recife",
        &["MEDICINA", "DIREITO", "ciencia da computacao", "PEDAGOGIA", "ENFERMAGEM"],
    ),
    (
        "Universidade Federal do Norte",
        "Caruaru",
        &["PEDAGOGIA", "Lic. em Matematica", "ADMINISTRAÇÃO", "ENGENHARIA CIVIL"],
    ),
    (
        "Universidade Estadual do Litoral",
        "Salvador",
        &["MEDICINA", "PSICOLOGIA", "ENGENHARIA ELETRICA", "HISTÓRIA", "NUTRIÇÃO"],
    ),
    (
        "Universidade Estadual do Litoral",
        "Ilhéus",
        &["AGRONOMIA", "CIÊNCIAS BIOLÓGICAS", "LETRAS", "  licenciatura em   historia "],
    ),
    (
        "Instituto Tecnológico do Sertão",
        "Petrolina",
        &["SISTEMAS DE INFORMAÇÃO", "ENGENHARIA DE PRODUCAO", "MEDICINA VETERINÁRIA", "GASTRONOMIA"],
    ),
];

const VACANCIES: &[&str] = &["A", "A", "A", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", ""];

fn generate_rows(rng: &mut SimpleRng, per_course: usize) -> Vec<Row> {
    let mut rows = Vec::new();
    for &(university, city, courses) in CAMPUSES {
        for &course in courses {
            let base = 600.0 + rng.next_f64() * 150.0;
            for _ in 0..per_course {
                let vacancy = rng.pick(VACANCIES);
                let sex = if rng.next_f64() < 0.55 { "F" } else { "M" };
                let penalty = if vacancy == "A" { 0.0 } else { 25.0 };
                // A few blank scores, as in the real exports.
                let score = (rng.next_f64() > 0.02)
                    .then(|| (rng.gauss(base - penalty, 30.0) * 100.0).round() / 100.0);

                rows.push(Row {
                    university: university.to_string(),
                    course: course.to_string(),
                    city: city.to_string(),
                    vacancy: vacancy.to_string(),
                    sex: sex.to_string(),
                    score,
                });
            }
        }
    }
    rows
}

/// Current revision: accented headers, comma decimals.
fn write_csv(rows: &[Row], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer.write_record([
        "UNIVERSIDADE",
        "CURSO",
        "CIDADE",
        "VAGA CLASSIFICAÇÃO",
        "SEXO",
        "PONTUAÇÃO",
    ])?;
    for row in rows {
        let score = row
            .score
            .map(|s| format!("{s:.2}").replace('.', ","))
            .unwrap_or_default();
        writer.write_record([
            row.university.as_str(),
            row.course.as_str(),
            row.city.as_str(),
            row.vacancy.as_str(),
            row.sex.as_str(),
            score.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn text_column<'a>(rows: &'a [Row], f: impl Fn(&'a Row) -> &'a str) -> StringArray {
    StringArray::from(rows.iter().map(f).collect::<Vec<_>>())
}

/// Older revision: unaccented headers and `CAMPUS` for the city.
fn write_parquet(rows: &[Row], path: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("UNIVERSIDADE", DataType::Utf8, false),
        Field::new("CURSO", DataType::Utf8, false),
        Field::new("CAMPUS", DataType::Utf8, false),
        Field::new("VAGA CLASSIFICACAO", DataType::Utf8, false),
        Field::new("SEXO", DataType::Utf8, false),
        Field::new("PONTUACAO", DataType::Float64, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(text_column(rows, |r| r.university.as_str())),
            Arc::new(text_column(rows, |r| r.course.as_str())),
            Arc::new(text_column(rows, |r| r.city.as_str())),
            Arc::new(text_column(rows, |r| r.vacancy.as_str())),
            Arc::new(text_column(rows, |r| r.sex.as_str())),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.score).collect::<Vec<_>>(),
            )),
        ],
    )
    .context("building record batch")?;

    let file = File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng, 40);

    let out_dir = Path::new("data");
    std::fs::create_dir_all(out_dir)?;

    let csv_path = out_dir.join("alunos_classificados.csv");
    write_csv(&rows, &csv_path)?;
    let parquet_path = out_dir.join("alunos_classificados.parquet");
    write_parquet(&rows, &parquet_path)?;

    println!(
        "Wrote {} admitted students to {} and {}",
        rows.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}

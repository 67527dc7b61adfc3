use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static GENE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[gene=([^\]]+)\]").expect("static regex is valid"));
static GENE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GeneID:(\d+)").expect("static regex is valid"));
static PROTEIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[protein=([^\]]+)\]").expect("static regex is valid"));
static PROTEIN_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[protein_id=([^\]]+)\]").expect("static regex is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationField {
    Gene,
    GeneId,
    Protein,
    ProteinId,
}

impl AnnotationField {
    pub const ALL: [AnnotationField; 4] = [
        AnnotationField::Gene,
        AnnotationField::GeneId,
        AnnotationField::Protein,
        AnnotationField::ProteinId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationField::Gene => "gene",
            AnnotationField::GeneId => "GeneID",
            AnnotationField::Protein => "protein",
            AnnotationField::ProteinId => "protein_id",
        }
    }
}

impl fmt::Display for AnnotationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderAnnotation {
    pub gene: Box<str>,
    pub gene_id: Box<str>,
    pub protein: Box<str>,
    pub protein_id: Box<str>,
}

/// Pulls named annotation fields out of a raw FASTA header.
pub trait HeaderExtractor: Sync {
    fn field<'h>(&self, header: &'h str, field: AnnotationField) -> Option<&'h str>;

    /// All four fields, or the first one that is missing.
    fn annotation(&self, header: &str) -> Result<HeaderAnnotation, AnnotationField> {
        let get = |field: AnnotationField| {
            self.field(header, field)
                .map(Box::<str>::from)
                .ok_or(field)
        };
        Ok(HeaderAnnotation {
            gene: get(AnnotationField::Gene)?,
            gene_id: get(AnnotationField::GeneId)?,
            protein: get(AnnotationField::Protein)?,
            protein_id: get(AnnotationField::ProteinId)?,
        })
    }
}

/// Bracketed `[key=value]` fields as written by NCBI `cds_from_genomic` files,
/// with the gene identifier taken from `GeneID:<digits>` in `db_xref`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NcbiCdsHeader;

impl HeaderExtractor for NcbiCdsHeader {
    fn field<'h>(&self, header: &'h str, field: AnnotationField) -> Option<&'h str> {
        let re: &Regex = match field {
            AnnotationField::Gene => &GENE,
            AnnotationField::GeneId => &GENE_ID,
            AnnotationField::Protein => &PROTEIN,
            AnnotationField::ProteinId => &PROTEIN_ID,
        };
        re.captures(header)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = ">lcl|NC_000067.7_cds_NP_001001_1 [gene=Xkr4] \
        [db_xref=CCDS:CCDS14803.1,GeneID:497097] [protein=XK-related protein 4] \
        [protein_id=NP_001001.1] [location=complement(join(3216022..3216968,3421702..3421901))] \
        [gbkey=CDS]";

    #[test]
    fn extracts_every_field() {
        let ann = NcbiCdsHeader.annotation(HEADER).unwrap();
        assert_eq!(&*ann.gene, "Xkr4");
        assert_eq!(&*ann.gene_id, "497097");
        assert_eq!(&*ann.protein, "XK-related protein 4");
        assert_eq!(&*ann.protein_id, "NP_001001.1");
    }

    #[test]
    fn protein_does_not_match_protein_id() {
        let header = ">x [protein_id=NP_1.1]";
        assert_eq!(NcbiCdsHeader.field(header, AnnotationField::Protein), None);
        assert_eq!(
            NcbiCdsHeader.field(header, AnnotationField::ProteinId),
            Some("NP_1.1")
        );
    }

    #[test]
    fn missing_field_is_reported() {
        let header = HEADER.replace("[protein_id=NP_001001.1] ", "");
        assert_eq!(
            NcbiCdsHeader.annotation(&header),
            Err(AnnotationField::ProteinId)
        );

        let header = HEADER.replace("GeneID:497097", "MGI:1234");
        assert_eq!(
            NcbiCdsHeader.annotation(&header),
            Err(AnnotationField::GeneId)
        );
    }

    #[test]
    fn first_missing_field_wins() {
        assert_eq!(
            NcbiCdsHeader.annotation(">bare"),
            Err(AnnotationField::Gene)
        );
    }

    #[test]
    fn field_names_match_output_columns() {
        let names: Vec<&str> = AnnotationField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["gene", "GeneID", "protein", "protein_id"]);
    }
}

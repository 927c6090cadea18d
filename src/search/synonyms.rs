//! Synonym dictionary for Indonesian government documents

use crate::types::SynonymGroup;

/// Synonym groups: (primary, synonyms, category)
///
/// Terms may appear in more than one group; lookups take the union.
pub const SYNONYM_TABLE: &[(&str, &[&str], &str)] = &[
    // Housing and property
    (
        "perumahan",
        &["housing", "rumah", "tempat tinggal", "hunian", "permukiman", "kawasan", "properti"],
        "property",
    ),
    (
        "domisili",
        &["alamat", "tempat tinggal", "kediaman", "residence", "address", "tinggal"],
        "property",
    ),
    // Movement and migration
    (
        "perpindahan",
        &["movement", "migrasi", "pindah", "relokasi", "mobilitas", "transmigrasi"],
        "movement",
    ),
    (
        "pergerakan",
        &["movement", "mobilitas", "aktivitas", "dinamika", "perpindahan"],
        "movement",
    ),
    // Taxation
    ("pajak", &["tax", "retribusi", "pungutan", "iuran", "tarif", "bea"], "taxation"),
    (
        "PBB",
        &["pajak bumi bangunan", "pajak properti", "pajak tanah", "pajak rumah", "property tax"],
        "taxation",
    ),
    // Legal and administration
    ("dokumen", &["document", "berkas", "file", "arsip", "surat", "naskah"], "administration"),
    ("surat", &["letter", "dokumen", "berkas", "naskah", "correspondence"], "administration"),
    (
        "keterangan",
        &["certificate", "sertifikat", "bukti", "konfirmasi", "statement"],
        "administration",
    ),
    // Finance
    ("anggaran", &["budget", "dana", "keuangan", "alokasi", "biaya", "pendanaan"], "finance"),
    ("keuangan", &["finance", "financial", "anggaran", "dana", "ekonomi", "fiscal"], "finance"),
    // Investigation and oversight
    (
        "investigasi",
        &["investigation", "penyelidikan", "pemeriksaan", "audit", "penelitian"],
        "oversight",
    ),
    (
        "korupsi",
        &["corruption", "penyalahgunaan", "penyelewengan", "fraud", "kecurangan"],
        "oversight",
    ),
    (
        "pengawasan",
        &["oversight", "monitoring", "supervisi", "kontrol", "pemantauan"],
        "oversight",
    ),
    // Regional government
    ("daerah", &["regional", "wilayah", "area", "kawasan", "lokal", "region"], "regional"),
    (
        "pemerintah",
        &["government", "pemda", "administrasi", "birokrasi", "instansi"],
        "regional",
    ),
];

/// Built-in synonym groups
pub fn default_synonym_groups() -> Vec<SynonymGroup> {
    SYNONYM_TABLE
        .iter()
        .map(|(primary, synonyms, category)| SynonymGroup::new(primary, synonyms, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_groups_loaded() {
        let groups = default_synonym_groups();
        assert_eq!(groups.len(), SYNONYM_TABLE.len());
        assert!(groups.iter().any(|g| g.primary == "perumahan" && g.category == "property"));
    }

    #[test]
    fn test_no_empty_terms() {
        for group in default_synonym_groups() {
            assert!(group.terms().all(|t| !t.trim().is_empty()), "{}", group.primary);
        }
    }
}

// src/model/elements.rs

/// Returns the molar mass (g/mol) of an oxide formula or a bare element symbol.
/// Only species that occur in oxide glasses are listed; anything else is `None`.
///
/// Each oxide sits next to its cation. Uranium appears under two oxides
/// (UO2, UO3) but has a single element entry.
pub fn molar_mass(formula: &str) -> Option<f64> {
    let mass = match formula {
        // --- Network formers ---
        "SiO2" => 60.08, "Si" => 28.09,
        "B2O3" => 69.62, "B" => 10.81,
        "P2O5" => 141.94, "P" => 30.97,
        "TeO2" => 159.60, "Te" => 127.60,
        "GeO2" => 104.64, "Ge" => 72.64,
        "As2O3" => 197.84, "As" => 74.92,
        "Sb2O3" => 291.52, "Sb" => 121.76,
        "Bi2O3" => 465.96, "Bi" => 208.98,
        "V2O5" => 181.88, "V" => 50.94,
        "WO3" => 231.84, "W" => 183.84,

        // --- Alkali ---
        "Na2O" => 61.98, "Na" => 22.99,
        "K2O" => 94.20, "K" => 39.10,
        "Li2O" => 29.88, "Li" => 6.94,
        "Cs2O" => 281.81, "Cs" => 132.91,
        "Rb2O" => 186.94, "Rb" => 85.47,

        // --- Alkaline earth ---
        "CaO" => 56.08, "Ca" => 40.08,
        "MgO" => 40.31, "Mg" => 24.31,
        "BaO" => 153.33, "Ba" => 137.33,
        "SrO" => 103.62, "Sr" => 87.62,

        // --- Heavy metal / modifier oxides ---
        "PbO" => 223.20, "Pb" => 207.20,
        "ZnO" => 81.38, "Zn" => 65.38,
        "CdO" => 128.41, "Cd" => 112.41,
        "Ag2O" => 231.74, "Ag" => 107.87,
        "Tl2O" => 424.76, "Tl" => 204.38,

        // --- Intermediates & transition metals ---
        "Al2O3" => 101.96, "Al" => 26.98,
        "Fe2O3" => 159.69, "Fe" => 55.85,
        "TiO2" => 79.87, "Ti" => 47.87,
        "ZrO2" => 123.22, "Zr" => 91.22,
        "HfO2" => 210.49, "Hf" => 178.49,
        "SnO2" => 150.71, "Sn" => 118.71,
        "NiO" => 74.69, "Ni" => 58.69,
        "Cr2O3" => 152.00, "Cr" => 52.00,
        "MnO2" => 86.94, "Mn" => 54.94,
        "Nb2O5" => 265.81, "Nb" => 92.91,
        "Ta2O5" => 441.89, "Ta" => 180.95,
        "Ga2O3" => 187.44, "Ga" => 69.72,
        "In2O3" => 277.64, "In" => 114.82,
        "Sc2O3" => 137.91, "Sc" => 44.96,
        "MoO3" => 143.95, "Mo" => 95.95,
        "RuO2" => 133.07, "Ru" => 101.07,
        "SeO2" => 110.97, "Se" => 78.97,
        "CoO" => 74.93, "Co" => 58.93,
        "CuO" => 79.55, "Cu" => 63.55,
        "Au2O3" => 441.94, "Au" => 196.97,

        // --- Rare earths ---
        "Y2O3" => 225.81, "Y" => 88.91,
        "La2O3" => 325.81, "La" => 138.91,
        "CeO2" => 172.12, "Ce" => 140.12,
        "Pr2O3" => 329.81, "Pr" => 140.91,
        "Nd2O3" => 336.48, "Nd" => 144.24,
        "Sm2O3" => 348.72, "Sm" => 150.36,
        "Eu2O3" => 351.92, "Eu" => 151.96,
        "Gd2O3" => 362.50, "Gd" => 157.25,
        "Tb2O3" => 365.85, "Tb" => 158.93,
        "Dy2O3" => 373.00, "Dy" => 162.50,
        "Ho2O3" => 377.86, "Ho" => 164.93,
        "Er2O3" => 382.52, "Er" => 167.26,
        "Tm2O3" => 385.86, "Tm" => 168.93,
        "Yb2O3" => 394.10, "Yb" => 173.05,
        "Lu2O3" => 397.94, "Lu" => 174.97,

        // --- Actinides (nuclear waste glasses) ---
        "ThO2" => 264.04, "Th" => 232.04,
        "UO2" => 270.03, "UO3" => 286.03, "U" => 238.03,
        "PuO2" => 276.06, "Pu" => 244.06,
        "NpO2" => 269.05, "Np" => 237.05,
        "Am2O3" => 534.12, "Am" => 243.06,
        "Cm2O3" => 542.14, "Cm" => 247.07,

        _ => return None,
    };
    Some(mass)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oxide_and_element_lookup() {
        assert_eq!(molar_mass("SiO2"), Some(60.08));
        assert_eq!(molar_mass("Si"), Some(28.09));
        assert_eq!(molar_mass("Al2O3"), Some(101.96));
    }

    #[test]
    fn test_uranium_oxides_share_one_element_entry() {
        assert_eq!(molar_mass("UO2"), Some(270.03));
        assert_eq!(molar_mass("UO3"), Some(286.03));
        assert_eq!(molar_mass("U"), Some(238.03));
    }

    #[test]
    fn test_unknown_formula() {
        assert_eq!(molar_mass("XyO"), None);
        assert_eq!(molar_mass("sio2"), None);
        assert!(molar_mass("Na2O").is_some());
    }

    #[test]
    fn test_all_masses_positive() {
        for f in ["B2O3", "K2O", "Lu2O3", "Cm", "Au2O3", "CoO", "Li"] {
            let m = molar_mass(f).unwrap();
            assert!(m > 0.0, "{}: non-positive mass {}", f, m);
        }
    }
}

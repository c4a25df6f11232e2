use serde::{Serialize, Serializer};

/// Question identifiers a scale aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleItems {
    /// Inclusive range of consecutive question ids.
    Range(u8, u8),
    List(&'static [u8]),
}

impl ScaleItems {
    pub fn ids(&self) -> Vec<u8> {
        match *self {
            Self::Range(from, to) => (from..=to).collect(),
            Self::List(ids) => ids.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        match *self {
            Self::Range(from, to) if to >= from => usize::from(to - from) + 1,
            Self::Range(..) => 0,
            Self::List(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for ScaleItems {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.ids())
    }
}

/// Named aggregation over a fixed set of questions.
///
/// `group` and `subgroup` only drive display nesting; a scale without a group
/// lands in the summary block of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub items: ScaleItems,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<&'static str>,
}

/// The scoring key of the questionnaire.
#[derive(Debug, Clone, Copy)]
pub struct ScaleCatalog {
    scales: &'static [ScaleDefinition],
}

impl ScaleCatalog {
    pub fn standard() -> Self {
        Self {
            scales: &STANDARD_SCALES,
        }
    }

    pub fn scales(&self) -> &'static [ScaleDefinition] {
        self.scales
    }

    pub fn get(&self, key: &str) -> Option<&'static ScaleDefinition> {
        self.scales.iter().find(|scale| scale.key == key)
    }

    /// Scales rendered under `group`, in catalog order.
    pub fn scales_in_group<'a>(
        &self,
        group: &'a str,
    ) -> impl Iterator<Item = &'static ScaleDefinition> + 'a {
        let scales: &'static [ScaleDefinition] = self.scales;
        scales
            .iter()
            .filter(move |scale| scale.group == Some(group))
    }
}

impl Default for ScaleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

pub const GROUP_PERSONAL: &str = "I. Személyes készségek";
pub const GROUP_INTERPERSONAL: &str = "II. Interperszonális készségek";
pub const GROUP_TEAM: &str = "III. Csoportos készségek";

/// Display order of the top-level groups.
pub const GROUP_ORDER: [&str; 3] = [GROUP_PERSONAL, GROUP_INTERPERSONAL, GROUP_TEAM];

static STANDARD_SCALES: [ScaleDefinition; 38] = [
    ScaleDefinition {
        key: "I_total",
        label: "I. Személyes készségek (1–23)",
        items: ScaleItems::Range(1, 23),
        group: Some(GROUP_PERSONAL),
        subgroup: None,
    },
    ScaleDefinition {
        key: "I_onismeret_total",
        label: "Önismeret fejlesztése (1–5)",
        items: ScaleItems::Range(1, 5),
        group: Some(GROUP_PERSONAL),
        subgroup: None,
    },
    ScaleDefinition {
        key: "I_onismeret_nyitottsag",
        label: "— Önismeret és nyitottság (1–2)",
        items: ScaleItems::List(&[1, 2]),
        group: Some(GROUP_PERSONAL),
        subgroup: Some("Önismeret fejlesztése"),
    },
    ScaleDefinition {
        key: "I_onismeret",
        label: "— Az önismeret (3–5)",
        items: ScaleItems::List(&[3, 4, 5]),
        group: Some(GROUP_PERSONAL),
        subgroup: Some("Önismeret fejlesztése"),
    },
    ScaleDefinition {
        key: "I_stressz_total",
        label: "A stressz kezelése (6–11)",
        items: ScaleItems::Range(6, 11),
        group: Some(GROUP_PERSONAL),
        subgroup: None,
    },
    ScaleDefinition {
        key: "I_stressorok",
        label: "— Stresszt okozó tényezők megszüntetése (6–7)",
        items: ScaleItems::List(&[6, 7]),
        group: Some(GROUP_PERSONAL),
        subgroup: Some("A stressz kezelése"),
    },
    ScaleDefinition {
        key: "I_rugalmassag",
        label: "— A rugalmasság fejlesztése (8–9)",
        items: ScaleItems::List(&[8, 9]),
        group: Some(GROUP_PERSONAL),
        subgroup: Some("A stressz kezelése"),
    },
    ScaleDefinition {
        key: "I_rovidtavu",
        label: "— Stressz rövid távú kezelése (10–11)",
        items: ScaleItems::List(&[10, 11]),
        group: Some(GROUP_PERSONAL),
        subgroup: Some("A stressz kezelése"),
    },
    ScaleDefinition {
        key: "I_problemamegoldas_total",
        label: "Problémamegoldás kreatív módon (12–23)",
        items: ScaleItems::Range(12, 23),
        group: Some(GROUP_PERSONAL),
        subgroup: None,
    },
    ScaleDefinition {
        key: "I_racionalis",
        label: "— Racionális problémamegoldás (12–14)",
        items: ScaleItems::List(&[12, 13, 14]),
        group: Some(GROUP_PERSONAL),
        subgroup: Some("Problémamegoldás"),
    },
    ScaleDefinition {
        key: "I_kreativ",
        label: "— Kreatív problémamegoldás (15–19)",
        items: ScaleItems::List(&[15, 16, 17, 18, 19]),
        group: Some(GROUP_PERSONAL),
        subgroup: Some("Problémamegoldás"),
    },
    ScaleDefinition {
        key: "I_innovacio_osztonzes",
        label: "— Innováció és kreativitás ösztönzése (20–23)",
        items: ScaleItems::List(&[20, 21, 22, 23]),
        group: Some(GROUP_PERSONAL),
        subgroup: Some("Problémamegoldás"),
    },
    ScaleDefinition {
        key: "II_total",
        label: "II. Interperszonális készségek (24–58)",
        items: ScaleItems::Range(24, 58),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: None,
    },
    ScaleDefinition {
        key: "II_tamogato_total",
        label: "Támogató kommunikáció (24–32)",
        items: ScaleItems::Range(24, 32),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: None,
    },
    ScaleDefinition {
        key: "II_coaching",
        label: "— Coaching és tanácsadás (24–25)",
        items: ScaleItems::List(&[24, 25]),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: Some("Támogató kommunikáció"),
    },
    ScaleDefinition {
        key: "II_negativ_visszajelzes",
        label: "— Hatékony negatív visszajelzés (26–28)",
        items: ScaleItems::List(&[26, 27, 28]),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: Some("Támogató kommunikáció"),
    },
    ScaleDefinition {
        key: "II_tamogato_comm",
        label: "— Támogató kommunikáció (29–32)",
        items: ScaleItems::List(&[29, 30, 31, 32]),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: Some("Támogató kommunikáció"),
    },
    ScaleDefinition {
        key: "II_hatalom_total",
        label: "Hatalom- és befolyásszerzés (33–40)",
        items: ScaleItems::Range(33, 40),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: None,
    },
    ScaleDefinition {
        key: "II_hatalomszerzes",
        label: "— Hatalomszerzés (33–37)",
        items: ScaleItems::List(&[33, 34, 35, 36, 37]),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: Some("Hatalom- és befolyásszerzés"),
    },
    ScaleDefinition {
        key: "II_befolyas",
        label: "— Befolyás gyakorlása (38–40)",
        items: ScaleItems::List(&[38, 39, 40]),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: Some("Hatalom- és befolyásszerzés"),
    },
    ScaleDefinition {
        key: "II_masok_mot",
        label: "Mások motiválása (41–49)",
        items: ScaleItems::Range(41, 49),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: None,
    },
    ScaleDefinition {
        key: "II_konfliktus_total",
        label: "Konfliktus kezelése (50–58)",
        items: ScaleItems::Range(50, 58),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: None,
    },
    ScaleDefinition {
        key: "II_kezdemenyezes",
        label: "— Kezdeményezés (50–52)",
        items: ScaleItems::List(&[50, 51, 52]),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: Some("Konfliktuskezelés"),
    },
    ScaleDefinition {
        key: "II_valaszadas",
        label: "— Válaszadás (53–55)",
        items: ScaleItems::List(&[53, 54, 55]),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: Some("Konfliktuskezelés"),
    },
    ScaleDefinition {
        key: "II_kozvetites",
        label: "— Közvetítés (56–58)",
        items: ScaleItems::List(&[56, 57, 58]),
        group: Some(GROUP_INTERPERSONAL),
        subgroup: Some("Konfliktuskezelés"),
    },
    ScaleDefinition {
        key: "III_total",
        label: "III. Csoportos készségek (59–84)",
        items: ScaleItems::Range(59, 84),
        group: Some(GROUP_TEAM),
        subgroup: None,
    },
    ScaleDefinition {
        key: "III_felhatalmazas_total",
        label: "Felhatalmazás és delegálás (59–67)",
        items: ScaleItems::Range(59, 67),
        group: Some(GROUP_TEAM),
        subgroup: None,
    },
    ScaleDefinition {
        key: "III_felhatalmazas",
        label: "— Felhatalmazás (59–62)",
        items: ScaleItems::List(&[59, 60, 61, 62]),
        group: Some(GROUP_TEAM),
        subgroup: Some("Felhatalmazás és delegálás"),
    },
    ScaleDefinition {
        key: "III_delegalas",
        label: "— Delegálás (63–67)",
        items: ScaleItems::List(&[63, 64, 65, 66, 67]),
        group: Some(GROUP_TEAM),
        subgroup: Some("Felhatalmazás és delegálás"),
    },
    ScaleDefinition {
        key: "III_csapat_total",
        label: "Hatékony csapatok és csapatmunka (68–77)",
        items: ScaleItems::Range(68, 77),
        group: Some(GROUP_TEAM),
        subgroup: None,
    },
    ScaleDefinition {
        key: "III_csapat_vezetes",
        label: "— Csapat vezetése (68–71)",
        items: ScaleItems::List(&[68, 69, 70, 71]),
        group: Some(GROUP_TEAM),
        subgroup: Some("Hatékony csapatok és csapatmunka"),
    },
    ScaleDefinition {
        key: "III_csapattag",
        label: "— Csapattagjaként dolgozni (72–73)",
        items: ScaleItems::List(&[72, 73]),
        group: Some(GROUP_TEAM),
        subgroup: Some("Hatékony csapatok és csapatmunka"),
    },
    ScaleDefinition {
        key: "III_csapatmunka",
        label: "— Csapatmunka (74–77)",
        items: ScaleItems::List(&[74, 75, 76, 77]),
        group: Some(GROUP_TEAM),
        subgroup: Some("Hatékony csapatok és csapatmunka"),
    },
    ScaleDefinition {
        key: "III_valtozas_total",
        label: "Pozitív változások elérése (78–84)",
        items: ScaleItems::Range(78, 84),
        group: Some(GROUP_TEAM),
        subgroup: None,
    },
    ScaleDefinition {
        key: "III_valtozas_elosegitese",
        label: "— Elősegíteni a pozitív változást (78–80)",
        items: ScaleItems::List(&[78, 79, 80]),
        group: Some(GROUP_TEAM),
        subgroup: Some("Pozitív változások elérése"),
    },
    ScaleDefinition {
        key: "III_pozitiv_valtozas",
        label: "— A pozitív változás (81–82)",
        items: ScaleItems::List(&[81, 82]),
        group: Some(GROUP_TEAM),
        subgroup: Some("Pozitív változások elérése"),
    },
    ScaleDefinition {
        key: "III_masok_mot",
        label: "— Mások motiválása (83–84)",
        items: ScaleItems::List(&[83, 84]),
        group: Some(GROUP_TEAM),
        subgroup: Some("Pozitív változások elérése"),
    },
    ScaleDefinition {
        key: "TOTAL",
        label: "Összpontszám (1–84)",
        items: ScaleItems::Range(1, 84),
        group: None,
        subgroup: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::questions::SECTIONS;

    #[test]
    fn catalog_ends_with_total_scale() {
        let catalog = ScaleCatalog::standard();
        let total = catalog.scales().last().expect("catalog is not empty");
        assert_eq!(total.key, "TOTAL");
        assert_eq!(total.items.len(), 84);
        assert!(total.group.is_none());
    }

    #[test]
    fn group_totals_match_question_sections() {
        let catalog = ScaleCatalog::standard();
        for (key, section) in ["I_total", "II_total", "III_total"].iter().zip(SECTIONS.iter()) {
            let scale = catalog.get(key).expect("group total present");
            assert_eq!(scale.items.ids(), section.ids().collect::<Vec<_>>());
        }
    }

    #[test]
    fn subgroup_scales_stay_inside_their_group_total() {
        let catalog = ScaleCatalog::standard();
        for (group, total_key) in GROUP_ORDER.iter().zip(["I_total", "II_total", "III_total"]) {
            let total = catalog.get(total_key).expect("group total present").items.ids();
            for scale in catalog.scales_in_group(group) {
                assert!(
                    scale.items.ids().iter().all(|id| total.contains(id)),
                    "{} escapes {}",
                    scale.key,
                    group
                );
            }
        }
    }

    #[test]
    fn item_lengths_agree_with_ids() {
        for scale in ScaleCatalog::standard().scales() {
            assert_eq!(scale.items.len(), scale.items.ids().len(), "{}", scale.key);
            assert!(!scale.items.is_empty());
        }
        assert_eq!(ScaleItems::Range(5, 4).len(), 0);
    }

    #[test]
    fn keys_are_unique() {
        let scales = ScaleCatalog::standard().scales();
        for (index, scale) in scales.iter().enumerate() {
            assert!(scales[index + 1..].iter().all(|other| other.key != scale.key));
        }
    }
}

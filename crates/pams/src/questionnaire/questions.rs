use serde::Serialize;
use std::ops::RangeInclusive;

/// Number of items on the questionnaire.
pub const QUESTION_COUNT: u8 = 84;

/// A single statement the respondent rates on the 1–6 agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
}

/// Display section of the questionnaire. Sections partition `1..=84`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionSection {
    pub key: &'static str,
    pub title: &'static str,
    pub from: u8,
    pub to: u8,
}

impl QuestionSection {
    pub fn ids(&self) -> RangeInclusive<u8> {
        self.from..=self.to
    }

    pub fn questions(&self) -> impl Iterator<Item = &'static Question> {
        QUESTIONS[usize::from(self.from) - 1..usize::from(self.to)].iter()
    }
}

pub static SECTIONS: [QuestionSection; 3] = [
    QuestionSection {
        key: "I",
        title: "I. Személyes készségek (1–23)",
        from: 1,
        to: 23,
    },
    QuestionSection {
        key: "II",
        title: "II. Interperszonális készségek (24–58)",
        from: 24,
        to: 58,
    },
    QuestionSection {
        key: "III",
        title: "III. Csoportos készségek (59–84)",
        from: 59,
        to: 84,
    },
];

/// Looks up a question by its 1-based identifier.
pub fn question(id: u8) -> Option<&'static Question> {
    if id == 0 {
        return None;
    }
    QUESTIONS.get(usize::from(id) - 1)
}

pub fn question_ids() -> RangeInclusive<u8> {
    1..=QUESTION_COUNT
}

pub static QUESTIONS: [Question; 84] = [
    Question {
        id: 1,
        text: "Az erősségeimre és gyengeségeimre vonatkozó megjegyzéseket szívesen fogadom másoktól, mert így tudom magam fejleszteni.",
    },
    Question {
        id: 2,
        text: "Annak érdekében, hogy fejlesszem önmagam, mások előtt felvállalom a véleményemet, hitemet, érzéseimet.",
    },
    Question {
        id: 3,
        text: "Tisztában vagyok azzal, hogy milyen stílusban gyűjtök információimat, és hogy mi alapján hozom meg a döntéseimet.",
    },
    Question {
        id: 4,
        text: "Jó érzékem van ahhoz, hogy megbirkózzak a kétértelmű és bizonytalan helyzetekkel.",
    },
    Question {
        id: 5,
        text: "Jól kidolgozott személyes viselkedési modellem van, hogy adott szituációban hogyan viselkedem.",
    },
    Question {
        id: 6,
        text: "Hatékony időgazdálkodási módszereket használok (időkövetés, teendőlista, rangsorolás).",
    },
    Question {
        id: 7,
        text: "Gyakran megerősítem prioritásaimat, hogy a kevésbé fontos dolgok ne vegyék el az időmet a fontosaktól.",
    },
    Question {
        id: 8,
        text: "Rendszeres testmozgással fenntartom a fittségemet.",
    },
    Question {
        id: 9,
        text: "Nyílt, bizalmi kapcsolatot ápolok olyan személlyel, akivel megoszthatom az engem frusztráló dolgokat.",
    },
    Question {
        id: 10,
        text: "Ismerek és gyakorolok relaxációs technikákat (pl. légzés, izomlazítás).",
    },
    Question {
        id: 11,
        text: "Életemben fenntartom az egyensúlyt: a munkán kívül érdeklődéseimhez illő szabadidős tevékenységekkel is foglalkozom.",
    },
    Question {
        id: 12,
        text: "Világosan megfogalmazom, mi a probléma; a megoldást addig halasztom, míg pontosan nem definiáltam.",
    },
    Question {
        id: 13,
        text: "Mindig egynél több alternatívát találok egy probléma megoldására.",
    },
    Question {
        id: 14,
        text: "Lépésről lépésre haladok: probléma-meghatározás → alternatívák keresése → megoldás kiválasztása.",
    },
    Question {
        id: 15,
        text: "Többféleképpen fogalmazom meg a nehéz problémát; nem korlátozom magam egy megközelítésre.",
    },
    Question {
        id: 16,
        text: "Kérdésekkel feltárom a probléma eredetét, több nézőpontból megvizsgálva azt.",
    },
    Question {
        id: 17,
        text: "A megoldást intuitív (jobb agyfélteke) és logikai (bal agyfélteke) módon is megközelítem.",
    },
    Question {
        id: 18,
        text: "Nem értékelek megoldásokat addig, amíg a lehetséges alternatívák teljes sorát össze nem gyűjtöttem.",
    },
    Question {
        id: 19,
        text: "Vannak speciális technikáim kreatív, innovatív megoldások kidolgozására.",
    },
    Question {
        id: 20,
        text: "Gondoskodom a nézőpontok sokszínűségéről a komplex problémamegoldás során.",
    },
    Question {
        id: 21,
        text: "A csoporton kívülről is gyűjtök információt az érintettek preferenciáiról és elvárásairól.",
    },
    Question {
        id: 22,
        text: "Az ötletgazdák mellett meghallgatom a támogatókat és a megvalósítást biztosítókat is.",
    },
    Question {
        id: 23,
        text: "Bátorítom a szabályokból való kilépést a kreatív megoldások érdekében.",
    },
    Question {
        id: 24,
        text: "Segítek másoknak problémáik felismerésében és meghatározásában tanácsadáskor.",
    },
    Question {
        id: 25,
        text: "Tisztában vagyok, mikor coach-oljak és mikor adjak tanácsot helyette.",
    },
    Question {
        id: 26,
        text: "Visszajelzéskor nem a személyt minősítem, hanem a problémára és megoldására fókuszálok.",
    },
    Question {
        id: 27,
        text: "Segítő szándékom általában a kapcsolat erősödéséhez vezet.",
    },
    Question {
        id: 28,
        text: "Objektíven adok negatív visszajelzést (tények, következmények, érzéseim leírása).",
    },
    Question {
        id: 29,
        text: "Felelősséget vállalok kijelentéseimért (pl. „Én úgy döntöttem” a „úgy döntöttek” helyett).",
    },
    Question {
        id: 30,
        text: "Vitatkozáskor közös megállapodásra törekszem eltérő értékrendű személlyel is.",
    },
    Question {
        id: 31,
        text: "Nem beszélek lekezelően alacsonyabb pozícióban lévőkkel vagy kevesebb információval bírókkal.",
    },
    Question {
        id: 32,
        text: "Problémáknál inkább megértést tanúsítok, semmint azonnal tanácsot adok.",
    },
    Question {
        id: 33,
        text: "Elvártnál több erőfeszítést és kezdeményezést teszek.",
    },
    Question {
        id: 34,
        text: "Folyamatosan fejlesztem készségeimet és tudásomat.",
    },
    Question {
        id: 35,
        text: "Határozottan támogatom a szervezeten belüli ünnepi rendezvényeket, eseményeket.",
    },
    Question {
        id: 36,
        text: "Széles kapcsolati hálót építek a szervezet minden szintjén.",
    },
    Question {
        id: 37,
        text: "Új ötleteket hozok, új tevékenységeket kezdeményezek, minimalizálom a rutint.",
    },
    Question {
        id: 38,
        text: "Személyes üzenetekkel kommunikálok fontos feladatoknál, információknál.",
    },
    Question {
        id: 39,
        text: "Nem vagyok hajlandó tárgyalni kényszerítő taktikát alkalmazó személyekkel.",
    },
    Question {
        id: 40,
        text: "Soha nem fenyegetek és nem követelőzöm az akaratom érvényesítésére.",
    },
    Question {
        id: 41,
        text: "Ellenőrzöm, hogy a személy rendelkezik-e a szükséges forrásokkal és támogatással.",
    },
    Question {
        id: 42,
        text: "Különböző jutalmakkal támogatom a magas teljesítményt.",
    },
    Question {
        id: 43,
        text: "Érdekes, kihívást jelentő feladatokat határozok meg.",
    },
    Question {
        id: 44,
        text: "Időben adok visszajelzést az elvégzett feladatról.",
    },
    Question {
        id: 45,
        text: "Segítek a kihívást jelentő, speciális és rövid határidejű feladatoknál.",
    },
    Question {
        id: 46,
        text: "Csak végső esetben bocsátok el gyenge teljesítmény esetén.",
    },
    Question {
        id: 47,
        text: "Következetesen jelzem, ha valakinek a teljesítménye nem megfelelő.",
    },
    Question {
        id: 48,
        text: "Tisztességes és méltányos bánásmódot biztosítok.",
    },
    Question {
        id: 49,
        text: "Jó teljesítményt dicsérettel és elismeréssel jutalmazok.",
    },
    Question {
        id: 50,
        text: "Kerülöm a személyes vádakat másokkal szemben.",
    },
    Question {
        id: 51,
        text: "Bátorítom a kétirányú párbeszédet: a felek megismerik egymás szemszögét és kérdezhetnek.",
    },
    Question {
        id: 52,
        text: "A munkatársaktól kérem, hogy részletezzék az elfogadhatóbb lehetőséget.",
    },
    Question {
        id: 53,
        text: "Panasz esetén figyelmesen, érdeklődéssel reagálok, akkor is, ha nem értek egyet.",
    },
    Question {
        id: 54,
        text: "További információkat gyűjtök és konkrét, helyzetleíró kérdéseket teszek fel.",
    },
    Question {
        id: 55,
        text: "Megkérem a másik felet, javasoljon elfogadhatóbb viselkedést.",
    },
    Question {
        id: 56,
        text: "Mediátorként nem foglalok állást; semleges maradok.",
    },
    Question {
        id: 57,
        text: "Segítek a feleknek több alternatíva megismerésében.",
    },
    Question {
        id: 58,
        text: "Segítek a feleknek megtalálni az egyetértési pontokat.",
    },
    Question {
        id: 59,
        text: "Segítek az embereknek kompetensnek érezni magukat: észreveszem és ünneplem a kis sikereket.",
    },
    Question {
        id: 60,
        text: "Rendszeresen adok visszajelzést és megadom a szükséges támogatást.",
    },
    Question {
        id: 61,
        text: "Biztosítok minden szükséges információt a feladatok elvégzéséhez.",
    },
    Question {
        id: 62,
        text: "Kiemelem az egyén munkájának fontos hatását.",
    },
    Question {
        id: 63,
        text: "Világosan megfogalmazom az elvárt eredményeket.",
    },
    Question {
        id: 64,
        text: "Egyértelműen meghatározom, ki mit és mikor tegyen (pl. instrukcióig várjon; részfeladat; teljes feladat stb.).",
    },
    Question {
        id: 65,
        text: "Engedem, hogy a megbízást elfogadók maguk döntsék el, hogyan és mikor végzik a munkát.",
    },
    Question {
        id: 66,
        text: "Probléma esetén inkább tanácsot kérek és kérdezek a főnökeimtől, nem pedig a megoldást várom.",
    },
    Question {
        id: 67,
        text: "A delegált feladatokat rendszeresen, folyamatosan nyomon követem.",
    },
    Question {
        id: 68,
        text: "Tisztában vagyok, hogyan maradok hiteles, és hogyan befolyásolom a csapattagokat.",
    },
    Question {
        id: 69,
        text: "Világos és következetes vagyok abban, amit el akarok érni.",
    },
    Question {
        id: 70,
        text: "Közös alapot alakítok ki a csapatban a tagok egyetértésével, mielőtt továbblépünk.",
    },
    Question {
        id: 71,
        text: "Pontosan ismertetem a rövid távú célokat és sikereket a csapattal.",
    },
    Question {
        id: 72,
        text: "Ismerem a csapatban való feladatmegoldás módszereit.",
    },
    Question {
        id: 73,
        text: "Ismerem a szoros kapcsolatok építésének és az együttműködés ösztönzésének módszereit.",
    },
    Question {
        id: 74,
        text: "Jól ismerem a csapatfejlesztés különböző szakaszait.",
    },
    Question {
        id: 75,
        text: "Elősegítem a „birkaszellem” elkerülését: biztosítom a vélemények sokszínű kifejezését.",
    },
    Question {
        id: 76,
        text: "Elemzem és kihasználom a csapat fő kompetenciáit és egyedi erősségeit.",
    },
    Question {
        id: 77,
        text: "Egyszerre ösztönzök drámai áttörést és folyamatos (akár kicsi) fejlesztéseket.",
    },
    Question {
        id: 78,
        text: "Pozitív energiát sugárzok a környezetemnek.",
    },
    Question {
        id: 79,
        text: "Hangsúlyozom, hogy a kívánt változás magasabb célokat szolgál.",
    },
    Question {
        id: 80,
        text: "Gyakran és látható módon köszönetet mondok, még kisebb cselekedetekért is.",
    },
    Question {
        id: 81,
        text: "Hangsúlyozom, hogy erősségekre építünk, nem csak gyengeségeket küszöbölünk ki.",
    },
    Question {
        id: 82,
        text: "Kommunikációmban jóval több a pozitív megjegyzés, mint a negatív.",
    },
    Question {
        id: 83,
        text: "Célkommunikációban nem csak az észre, a szívre is hatok.",
    },
    Question {
        id: 84,
        text: "Tudom, hogyan nyerjem meg az embereket a pozitív változás támogatására és részvételére.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_are_numbered_sequentially() {
        for (index, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(usize::from(question.id), index + 1);
            assert!(!question.text.trim().is_empty());
        }
    }

    #[test]
    fn sections_partition_all_questions() {
        let mut covered: Vec<u8> = SECTIONS.iter().flat_map(|section| section.ids()).collect();
        covered.sort_unstable();
        assert_eq!(covered, question_ids().collect::<Vec<_>>());

        let third = &SECTIONS[2];
        assert_eq!(third.questions().count(), 26);
        assert_eq!(third.questions().next().map(|q| q.id), Some(59));
    }

    #[test]
    fn lookup_rejects_out_of_range_ids() {
        assert!(question(0).is_none());
        assert!(question(85).is_none());
        assert_eq!(question(84).map(|q| q.id), Some(84));
    }
}

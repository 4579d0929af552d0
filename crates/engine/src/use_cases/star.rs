//! Star generator - primary star and companions.

use starsmith_domain::entities::star::fields;
use starsmith_domain::tables::{
    companion_count_modifier, COMPANION_COUNT_TABLE, MIN_COMPANION_SEPARATION_AU,
    SEPARATION_TABLE, STAR_CLASS_TABLE,
};
use starsmith_domain::{
    CompanionSet, Provenance, RollRecord, SpectralClass, SpectralGrade, StarId, StarRecord,
    StarSystemId,
};

use super::{stellar, GenerationError};
use crate::dice::DiceRoller;

pub struct GenerateStar {
    dice: DiceRoller,
}

impl GenerateStar {
    pub fn new(dice: DiceRoller) -> Self {
        Self { dice }
    }

    /// Class on 2D6, then grade, then resolved properties.
    fn roll_star(&self, id: StarId) -> Result<StarRecord, GenerationError> {
        let mut provenance = Provenance::procedural();

        let class_roll = self.dice.roll_2d6();
        let class = *STAR_CLASS_TABLE.lookup(class_roll.total);
        provenance.record(fields::CLASS, class_roll);

        let max_grade = i32::from(SpectralGrade::MAX);
        let grade_value = self.dice.pick(0, max_grade);
        provenance.record(
            fields::GRADE,
            RollRecord::Pick {
                value: grade_value,
                min: 0,
                max: max_grade,
            },
        );
        let grade = SpectralGrade::new(i64::from(grade_value))?;

        let properties = stellar::resolve(class, grade)?;
        Ok(StarRecord::new(id, class, grade, properties).with_provenance(provenance))
    }

    pub fn generate_primary(&self, star_id: StarId) -> Result<StarRecord, GenerationError> {
        let star = self.roll_star(star_id)?;
        tracing::debug!(
            star_id = %star.id(),
            designation = %star.designation(),
            luminosity = star.luminosity(),
            "Primary star generated"
        );
        Ok(star)
    }

    /// Companions of a primary. Each one is rolled independently; the set's
    /// own provenance holds only the count roll.
    pub fn generate_companions(
        &self,
        system_id: &StarSystemId,
        primary_class: SpectralClass,
        primary_grade: SpectralGrade,
    ) -> Result<CompanionSet, GenerationError> {
        let count_roll = self.dice.roll_2d6();
        let modifier = companion_count_modifier(primary_class, primary_grade);
        let count = *COMPANION_COUNT_TABLE.lookup(count_roll.total + modifier);
        let provenance = Provenance::procedural().with_roll(fields::COMPANION_COUNT, count_roll);

        let mut companions = Vec::with_capacity(count);
        for index in 1..=count {
            let star = self.roll_star(system_id.companion(index))?;

            let band_roll = self.dice.roll_2d6();
            let band = *SEPARATION_TABLE.lookup(band_roll.total);
            let multiplier = self.dice.roll_1d6();
            let distance =
                (band.au_per_pip() * f64::from(multiplier.total)).max(MIN_COMPANION_SEPARATION_AU);

            companions.push(star.with_separation(distance, band_roll, multiplier));
        }

        let set = CompanionSet::new(companions, provenance);
        tracing::debug!(
            star_system_id = %system_id,
            companions = set.len(),
            system_type = %set.system_type(),
            "Companions generated"
        );
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::random::ScriptedRandom;
    use starsmith_domain::{GenerationMethod, SystemType};

    fn generator(script: Vec<i32>) -> GenerateStar {
        GenerateStar::new(DiceRoller::new(Arc::new(ScriptedRandom::new(script))))
    }

    fn system() -> StarSystemId {
        StarSystemId::new("sys").unwrap()
    }

    fn grade(value: i64) -> SpectralGrade {
        SpectralGrade::new(value).unwrap()
    }

    #[test]
    fn primary_rolls_class_then_grade() {
        // 3 + 4 = 7 -> G, grade pick 2
        let star = generator(vec![3, 4, 2])
            .generate_primary(system().primary_star())
            .unwrap();

        assert_eq!(star.designation(), "G2");
        assert_eq!(star.luminosity(), 1.0);
        assert_eq!(star.orbital_distance(), 0.0);
        assert!(star.is_primary());

        let fields: Vec<&str> = star
            .provenance()
            .rolls()
            .iter()
            .map(|r| r.field.as_str())
            .collect();
        assert_eq!(fields, vec!["class", "grade"]);
        assert_eq!(star.provenance().generation_method(), GenerationMethod::Procedural);
    }

    #[test]
    fn class_table_covers_both_ends() {
        let hottest = generator(vec![1, 1, 0])
            .generate_primary(system().primary_star())
            .unwrap();
        assert_eq!(hottest.class(), SpectralClass::O);

        let coolest = generator(vec![6, 6, 9])
            .generate_primary(system().primary_star())
            .unwrap();
        assert_eq!(coolest.designation(), "M9");
    }

    #[test]
    fn low_count_roll_gives_single_star() {
        // 1 + 1 - 2 (M) + 0 (grade 5) clamps to the bottom row
        let set = generator(vec![1, 1])
            .generate_companions(&system(), SpectralClass::M, grade(5))
            .unwrap();
        assert!(set.is_empty());
        assert_eq!(set.system_type(), SystemType::Single);
        assert!(set.provenance().roll_for("companion_count").is_some());
    }

    #[test]
    fn companions_roll_class_grade_separation_and_multiplier() {
        // count 4 + 4 + 1 (G2) = 9 -> one companion
        // companion: class 2 + 3 = 5 -> F, grade 7, band 3 + 4 = 7 near, multiplier 4
        let set = generator(vec![4, 4, 2, 3, 7, 3, 4, 4])
            .generate_companions(&system(), SpectralClass::G, grade(2))
            .unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.system_type(), SystemType::Binary);
        let companion = &set.companions()[0];
        assert_eq!(companion.id().as_str(), "sys/companion-1");
        assert_eq!(companion.designation(), "F7");
        assert_eq!(companion.orbital_distance(), 20.0);
        assert!(!companion.is_primary());

        let fields: Vec<&str> = companion
            .provenance()
            .rolls()
            .iter()
            .map(|r| r.field.as_str())
            .collect();
        assert_eq!(
            fields,
            vec!["class", "grade", "separation", "separation_multiplier"]
        );
    }

    #[test]
    fn bright_primary_raises_companion_count() {
        // 6 + 5 + 3 (O) + 1 (grade 0) = 15 -> three companions
        let set = generator(vec![6, 5, 3, 4, 0, 1, 1, 1])
            .generate_companions(&system(), SpectralClass::O, grade(0))
            .unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.system_type(), SystemType::Quaternary);
        for companion in set.companions() {
            assert!(companion.orbital_distance() >= MIN_COMPANION_SEPARATION_AU);
        }
    }

    #[test]
    fn system_type_follows_companion_count_only() {
        for script in [vec![1, 1], vec![5, 5], vec![6, 6]] {
            let set = generator(script)
                .generate_companions(&system(), SpectralClass::K, grade(7))
                .unwrap();
            assert_eq!(set.system_type().star_count(), set.len() + 1);
        }
    }
}

//! Predefined global exercise catalog.
//!
//! These rows are owner-less and visible to every user. Seeding is keyed by
//! name, so renaming an entry here adds a new exercise rather than updating
//! the old one.

/// A predefined exercise definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogExercise {
    pub name: &'static str,
    pub description: &'static str,
    pub muscle_group: &'static str,
}

pub const PREDEFINED_EXERCISES: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Press de Banca",
        description: "Ejercicio de pecho con barra",
        muscle_group: "Pecho",
    },
    CatalogExercise {
        name: "Press Inclinado",
        description: "Press de banca inclinado",
        muscle_group: "Pecho",
    },
    CatalogExercise {
        name: "Press Declinado",
        description: "Press de banca declinado",
        muscle_group: "Pecho",
    },
    CatalogExercise {
        name: "Press con Mancuernas",
        description: "Press de pecho con mancuernas",
        muscle_group: "Pecho",
    },
    CatalogExercise {
        name: "Aperturas con Mancuernas",
        description: "Aperturas para pecho con mancuernas",
        muscle_group: "Pecho",
    },
    CatalogExercise {
        name: "Fondos en Paralelas",
        description: "Fondos para pecho y tríceps",
        muscle_group: "Pecho",
    },
    CatalogExercise {
        name: "Press en Máquina",
        description: "Press de pecho en máquina",
        muscle_group: "Pecho",
    },
    CatalogExercise {
        name: "Cruces en Polea",
        description: "Cruces de pecho en poleas",
        muscle_group: "Pecho",
    },
    CatalogExercise {
        name: "Peso Muerto",
        description: "Ejercicio de espalda y piernas",
        muscle_group: "Espalda",
    },
    CatalogExercise {
        name: "Remo con Barra",
        description: "Ejercicio de espalda con barra",
        muscle_group: "Espalda",
    },
    CatalogExercise {
        name: "Remo con Mancuerna",
        description: "Remo unilateral con mancuerna",
        muscle_group: "Espalda",
    },
    CatalogExercise {
        name: "Dominadas",
        description: "Dominadas con peso corporal",
        muscle_group: "Espalda",
    },
    CatalogExercise {
        name: "Jalones al Pecho",
        description: "Jalones en polea alta",
        muscle_group: "Espalda",
    },
    CatalogExercise {
        name: "Peso Muerto Rumano",
        description: "Peso muerto enfocado en isquiotibiales",
        muscle_group: "Espalda",
    },
    CatalogExercise {
        name: "Remo en Polea Baja",
        description: "Remo sentado en polea",
        muscle_group: "Espalda",
    },
    CatalogExercise {
        name: "Pullover",
        description: "Pullover con mancuerna o barra",
        muscle_group: "Espalda",
    },
    CatalogExercise {
        name: "Sentadillas",
        description: "Ejercicio de piernas con barra",
        muscle_group: "Piernas",
    },
    CatalogExercise {
        name: "Prensa de Piernas",
        description: "Ejercicio de piernas en máquina",
        muscle_group: "Piernas",
    },
    CatalogExercise {
        name: "Sentadilla Frontal",
        description: "Sentadilla con barra al frente",
        muscle_group: "Piernas",
    },
    CatalogExercise {
        name: "Sentadilla Búlgara",
        description: "Sentadilla unilateral elevada",
        muscle_group: "Piernas",
    },
    CatalogExercise {
        name: "Extensiones de Cuádriceps",
        description: "Extensiones en máquina",
        muscle_group: "Piernas",
    },
    CatalogExercise {
        name: "Curl de Isquiotibiales",
        description: "Curl acostado o sentado",
        muscle_group: "Piernas",
    },
    CatalogExercise {
        name: "Zancadas",
        description: "Zancadas con mancuernas o barra",
        muscle_group: "Piernas",
    },
    CatalogExercise {
        name: "Hack Squat",
        description: "Sentadilla en máquina hack",
        muscle_group: "Piernas",
    },
    CatalogExercise {
        name: "Hip Thrust",
        description: "Empuje de cadera con barra",
        muscle_group: "Glúteos",
    },
    CatalogExercise {
        name: "Peso Muerto Sumo",
        description: "Peso muerto con stance amplio",
        muscle_group: "Glúteos",
    },
    CatalogExercise {
        name: "Patadas de Glúteo",
        description: "Patadas en cuadrupedia",
        muscle_group: "Glúteos",
    },
    CatalogExercise {
        name: "Puente de Glúteo",
        description: "Puente con peso corporal",
        muscle_group: "Glúteos",
    },
    CatalogExercise {
        name: "Sentadilla Sumo",
        description: "Sentadilla con stance amplio",
        muscle_group: "Glúteos",
    },
    CatalogExercise {
        name: "Press Militar",
        description: "Ejercicio de hombros con barra",
        muscle_group: "Hombros",
    },
    CatalogExercise {
        name: "Elevaciones Laterales",
        description: "Ejercicio de hombros con mancuernas",
        muscle_group: "Hombros",
    },
    CatalogExercise {
        name: "Press con Mancuernas Hombros",
        description: "Press de hombros con mancuernas",
        muscle_group: "Hombros",
    },
    CatalogExercise {
        name: "Elevaciones Frontales",
        description: "Elevaciones frontales con mancuernas",
        muscle_group: "Hombros",
    },
    CatalogExercise {
        name: "Elevaciones Posteriores",
        description: "Elevaciones para deltoides posterior",
        muscle_group: "Hombros",
    },
    CatalogExercise {
        name: "Remo al Mentón",
        description: "Remo vertical con barra",
        muscle_group: "Hombros",
    },
    CatalogExercise {
        name: "Press Arnold",
        description: "Press con rotación de mancuernas",
        muscle_group: "Hombros",
    },
    CatalogExercise {
        name: "Curl de Bíceps",
        description: "Ejercicio de bíceps con mancuernas",
        muscle_group: "Brazos",
    },
    CatalogExercise {
        name: "Extensiones de Tríceps",
        description: "Ejercicio de tríceps",
        muscle_group: "Brazos",
    },
    CatalogExercise {
        name: "Curl con Barra",
        description: "Curl de bíceps con barra",
        muscle_group: "Brazos",
    },
    CatalogExercise {
        name: "Press Francés",
        description: "Extensiones de tríceps acostado",
        muscle_group: "Brazos",
    },
    CatalogExercise {
        name: "Curl Martillo",
        description: "Curl con agarre neutro",
        muscle_group: "Brazos",
    },
    CatalogExercise {
        name: "Fondos en Banco",
        description: "Fondos para tríceps en banco",
        muscle_group: "Brazos",
    },
    CatalogExercise {
        name: "Curl en Polea",
        description: "Curl de bíceps en polea",
        muscle_group: "Brazos",
    },
    CatalogExercise {
        name: "Extensiones en Polea",
        description: "Extensiones de tríceps en polea",
        muscle_group: "Brazos",
    },
    CatalogExercise {
        name: "Curl Concentrado",
        description: "Curl de bíceps concentrado",
        muscle_group: "Brazos",
    },
    CatalogExercise {
        name: "Plank",
        description: "Plancha isométrica",
        muscle_group: "Abdomen",
    },
    CatalogExercise {
        name: "Crunches",
        description: "Abdominales tradicionales",
        muscle_group: "Abdomen",
    },
    CatalogExercise {
        name: "Elevaciones de Piernas",
        description: "Elevaciones colgado o acostado",
        muscle_group: "Abdomen",
    },
    CatalogExercise {
        name: "Russian Twists",
        description: "Giros rusos con peso",
        muscle_group: "Abdomen",
    },
    CatalogExercise {
        name: "Mountain Climbers",
        description: "Escaladores en plancha",
        muscle_group: "Abdomen",
    },
    CatalogExercise {
        name: "Dead Bug",
        description: "Ejercicio de estabilidad core",
        muscle_group: "Abdomen",
    },
    CatalogExercise {
        name: "Bicycle Crunches",
        description: "Abdominales bicicleta",
        muscle_group: "Abdomen",
    },
    CatalogExercise {
        name: "Ab Wheel",
        description: "Rueda abdominal",
        muscle_group: "Abdomen",
    },
    CatalogExercise {
        name: "Caminata",
        description: "Caminata en cinta o exterior",
        muscle_group: "Cardio",
    },
    CatalogExercise {
        name: "Correr",
        description: "Carrera en cinta o exterior",
        muscle_group: "Cardio",
    },
    CatalogExercise {
        name: "Bicicleta Estática",
        description: "Cardio en bicicleta",
        muscle_group: "Cardio",
    },
    CatalogExercise {
        name: "Elíptica",
        description: "Cardio en máquina elíptica",
        muscle_group: "Cardio",
    },
    CatalogExercise {
        name: "Remo Cardio",
        description: "Cardio en máquina de remo",
        muscle_group: "Cardio",
    },
    CatalogExercise {
        name: "HIIT",
        description: "Entrenamiento de intervalos",
        muscle_group: "Cardio",
    },
    CatalogExercise {
        name: "Burpees",
        description: "Ejercicio cardio funcional",
        muscle_group: "Cardio",
    },
    CatalogExercise {
        name: "Spinning",
        description: "Clase de bicicleta indoor",
        muscle_group: "Cardio",
    },
    CatalogExercise {
        name: "Step",
        description: "Aeróbicos con step",
        muscle_group: "Cardio",
    },
    CatalogExercise {
        name: "Kettlebell Swing",
        description: "Balanceo con pesa rusa",
        muscle_group: "Funcional",
    },
    CatalogExercise {
        name: "Thrusters",
        description: "Sentadilla + press overhead",
        muscle_group: "Funcional",
    },
    CatalogExercise {
        name: "Clean and Press",
        description: "Cargada y press",
        muscle_group: "Funcional",
    },
    CatalogExercise {
        name: "Turkish Get-Up",
        description: "Levantamiento turco",
        muscle_group: "Funcional",
    },
    CatalogExercise {
        name: "Farmers Walk",
        description: "Caminata del granjero",
        muscle_group: "Funcional",
    },
    CatalogExercise {
        name: "Battle Ropes",
        description: "Cuerdas de batalla",
        muscle_group: "Funcional",
    },
    CatalogExercise {
        name: "Box Jumps",
        description: "Saltos al cajón",
        muscle_group: "Funcional",
    },
    CatalogExercise {
        name: "Wall Balls",
        description: "Lanzamientos de balón medicinal",
        muscle_group: "Funcional",
    },
];

/// Distinct muscle groups present in the predefined catalog, in catalog order.
pub fn catalog_muscle_groups() -> Vec<&'static str> {
    let mut groups: Vec<&'static str> = Vec::new();
    for exercise in PREDEFINED_EXERCISES {
        if !groups.contains(&exercise.muscle_group) {
            groups.push(exercise.muscle_group);
        }
    }
    groups
}

//! Built-in question sets, one per [`AssessmentId`]
//!
//! Identifiers are the feature names the prediction service expects, so
//! their spelling (spaces, parentheses, slashes) is part of the wire
//! contract and must not be normalized.

use super::id::AssessmentId;
use crate::questionnaire::{Question, QuestionSet};

const YES_NO: [&str; 2] = ["Yes", "No"];
const SEVERITY: [&str; 3] = ["None", "Mild", "Severe"];

/// Build the question set for an assessment
pub fn question_set(id: AssessmentId) -> QuestionSet {
    let questions = match id {
        AssessmentId::General => general(),
        AssessmentId::Dementia => dementia(),
        AssessmentId::Headache => headache(),
        AssessmentId::Movement => movement(),
        AssessmentId::Vision => vision(),
        AssessmentId::Neurodegenerative => neurodegenerative(),
        AssessmentId::Cognitive => cognitive(),
        AssessmentId::Seizure => seizure(),
        AssessmentId::Psychomatic => psychomatic(),
    };
    QuestionSet::new(id.slug(), questions)
}

fn age(id: &str, min: f64, max: f64) -> Question {
    Question::numeric(id, "What is your age?", min, max)
}

fn gender(id: &str) -> Question {
    Question::choice(id, "What is your gender?", ["Male", "Female"])
}

fn yes_no(id: &str, prompt: &str) -> Question {
    Question::choice(id, prompt, YES_NO)
}

fn general() -> Vec<Question> {
    vec![
        age("age", 18.0, 80.0),
        gender("gender"),
        Question::choice(
            "ethnicity",
            "What is your ethnicity?",
            ["Caucasian", "Asian", "African American", "Hispanic", "Other"],
        ),
        Question::choice(
            "symptoms",
            "What are your primary symptoms?",
            [
                "Tremors",
                "Memory loss",
                "Headaches",
                "Seizures",
                "Vision issues",
                "Movement issues",
                "None",
            ],
        ),
        Question::choice("vision_issues", "How severe are your vision issues?", SEVERITY),
        Question::choice(
            "movement_issues",
            "How severe are your movement issues?",
            SEVERITY,
        ),
        Question::choice(
            "memory_loss",
            "How severe is your memory loss and cognitive decline?",
            SEVERITY,
        ),
        Question::choice(
            "progression_speed",
            "How would you describe your symptom progression speed?",
            ["Slow", "Moderate", "Rapid"],
        ),
        Question::choice(
            "symptom_frequency",
            "How often do you experience symptoms?",
            ["Rarely", "Occasionally", "Frequently"],
        ),
        Question::choice(
            "family_history",
            "Do you have a family history of these conditions?",
            ["None", "Distant relative", "First-degree relative"],
        ),
        Question::choice(
            "motor_coordination",
            "How severe are your motor coordination issues?",
            SEVERITY,
        ),
        Question::choice(
            "symptom_duration",
            "How long have you been experiencing symptoms?",
            [
                "Short (<6 months)",
                "Medium (6 months–2 years)",
                "Long (>2 years)",
            ],
        ),
        Question::choice(
            "symptom_worsening",
            "How would you describe your symptom progression?",
            ["None", "Gradual", "Rapid"],
        ),
        Question::choice(
            "comorbidities",
            "Do you have any of the following conditions?",
            ["None", "Diabetes", "Hypertension", "Obesity"],
        ),
        yes_no("sleep_issues", "Do you experience sleep issues?"),
        yes_no(
            "sensory_abnormalities",
            "Do you experience any sensory abnormalities?",
        ),
        Question::choice(
            "seizure_triggers",
            "What triggers your seizures?",
            ["Stress", "Alcohol", "Fever", "None"],
        ),
        Question::choice(
            "seizure_duration",
            "How long do your seizures typically last?",
            ["Short", "Medium", "Long", "None"],
        ),
    ]
}

fn dementia() -> Vec<Question> {
    vec![
        age("Age", 50.0, 100.0),
        gender("Gender"),
        yes_no("Memory_Issues", "Do you experience memory issues?"),
        yes_no(
            "Confusion_in_Familiar_Places",
            "Do you get confused in familiar places?",
        ),
        yes_no("Difficulty_Multitasking", "Do you have difficulty multitasking?"),
        yes_no("Hallucinations", "Do you experience hallucinations?"),
        yes_no(
            "Mood_Changes",
            "Have you experienced significant mood changes?",
        ),
        yes_no(
            "Personality_Changes",
            "Have you noticed changes in your personality?",
        ),
        yes_no("Speech_Issues", "Do you experience speech difficulties?"),
        yes_no(
            "Difficulty_Walking_or_Balance",
            "Do you have difficulty walking or maintaining balance?",
        ),
        yes_no("Vision_Problems", "Do you experience vision problems?"),
        yes_no("Tremors", "Do you experience tremors?"),
        yes_no(
            "Family_History_Dementia",
            "Do you have a family history of dementia?",
        ),
        yes_no("Smoking_History", "Do you have a smoking history?"),
        yes_no("Alcohol_Consumption", "Do you consume alcohol?"),
    ]
}

fn headache() -> Vec<Question> {
    vec![
        age("Age", 18.0, 100.0),
        gender("Gender"),
        Question::choice(
            "Onset_Type",
            "How did your headaches begin?",
            ["Sudden", "Gradual"],
        ),
        Question::numeric(
            "Headache_Frequency",
            "How many days per month do you experience headaches?",
            1.0,
            31.0,
        ),
        Question::numeric(
            "Headache_Duration (Hours)",
            "How long do your headaches typically last (in hours)?",
            0.5,
            72.0,
        ),
        Question::numeric(
            "Pain_Severity (1-10)",
            "On a scale of 1-10, how severe is your headache pain?",
            1.0,
            10.0,
        ),
        Question::choice(
            "Pain_Location",
            "Where is your headache pain typically located?",
            ["Unilateral", "Bilateral"],
        ),
        Question::choice(
            "Pain_Type",
            "What type of pain do you experience?",
            ["Pulsating", "Pressing"],
        ),
        Question::choice(
            "Triggers",
            "What typically triggers your headaches?",
            ["Stress", "Alcohol", "None"],
        ),
        yes_no("Aura", "Do you experience aura before headaches?"),
        yes_no("Photophobia", "Are you sensitive to light during headaches?"),
        yes_no("Phonophobia", "Are you sensitive to sound during headaches?"),
        yes_no(
            "Nausea/Vomiting",
            "Do you experience nausea or vomiting with headaches?",
        ),
        yes_no("Family_History", "Do you have a family history of headaches?"),
        Question::choice(
            "Mental_Health",
            "Do you have any mental health conditions?",
            ["None", "Anxiety", "Depression"],
        ),
        Question::numeric(
            "Caffeine_Consumption (Cups/Day)",
            "How many cups of caffeine do you consume daily?",
            0.0,
            10.0,
        ),
        yes_no("Alcohol_Use", "Do you consume alcohol?"),
        Question::numeric(
            "Stress_Level (%)",
            "Rate your stress level (0-100%)",
            0.0,
            100.0,
        ),
        yes_no("Analgesic_Overuse", "Do you frequently use pain medication?"),
        yes_no("Smoking_History", "Do you smoke?"),
        yes_no(
            "Facial_Sweating",
            "Do you experience facial sweating during headaches?",
        ),
        yes_no(
            "Eye_Symptoms",
            "Do you experience eye symptoms during headaches?",
        ),
        yes_no(
            "Nasal_Congestion",
            "Do you experience nasal congestion during headaches?",
        ),
        Question::choice(
            "Headache_Fluctuation",
            "How would you describe your headache pattern?",
            ["Constant", "Fluctuating"],
        ),
        yes_no(
            "Infection_History",
            "Do you have any recent history of infections?",
        ),
        yes_no(
            "Cognitive_Impairments",
            "Do you experience cognitive difficulties during headaches?",
        ),
        yes_no(
            "Concussion_Symptoms",
            "Do you experience any concussion-like symptoms?",
        ),
    ]
}

fn vision() -> Vec<Question> {
    vec![
        age("Age", 0.0, 100.0),
        gender("Gender"),
        Question::choice(
            "Vision_Loss_Pattern",
            "How would you describe your vision loss?",
            ["Sudden", "Gradual", "Intermittent"],
        ),
        Question::choice(
            "Visual_Field_Deficit",
            "Do you experience any visual field deficits?",
            ["None", "Partial", "Complete"],
        ),
        yes_no(
            "Color_Vision_Impairment",
            "Do you have any color vision impairments?",
        ),
        yes_no(
            "Visual_Hallucinations",
            "Do you experience visual hallucinations?",
        ),
        Question::choice(
            "Blurry_Vision",
            "How would you describe your blurry vision?",
            ["Constant", "Intermittent", "None"],
        ),
        yes_no(
            "Night_Vision_Difficulty",
            "Do you have difficulty seeing at night?",
        ),
        Question::choice(
            "Peripheral_Vision_Loss",
            "How would you describe your peripheral vision loss?",
            ["Mild", "Moderate", "Severe", "None"],
        ),
        yes_no(
            "Difficulty_Recognizing_Faces",
            "Do you have difficulty recognizing faces?",
        ),
        yes_no(
            "Eye_Pain_On_Movement",
            "Do you experience eye pain when moving your eyes?",
        ),
        yes_no(
            "Headaches_Or_Dizziness",
            "Do you experience headaches or dizziness?",
        ),
        yes_no(
            "Eye_Pressure_Or_Heaviness",
            "Do you feel eye pressure or heaviness?",
        ),
        yes_no(
            "Objects_Appear_Shaky",
            "Do objects appear shaky or unstable to you?",
        ),
        Question::numeric(
            "Duration_Of_Symptoms (Weeks)",
            "How long have you been experiencing these symptoms (in weeks)?",
            0.0,
            520.0,
        ),
        Question::choice(
            "Impact_On_Daily_Activities",
            "Which daily activities are most impacted by your vision?",
            ["Reading", "Driving", "Computer Work", "None"],
        ),
        Question::choice(
            "Triggering_Factors",
            "What seems to trigger or worsen your symptoms?",
            ["Stress", "Fatigue", "Bright Light", "None"],
        ),
        yes_no("History_Of_Stroke", "Do you have a history of stroke?"),
    ]
}

fn neurodegenerative() -> Vec<Question> {
    vec![
        age("Age", 0.0, 100.0),
        gender("Gender"),
        yes_no(
            "Forgetfulness",
            "Do you experience increasing forgetfulness?",
        ),
        yes_no(
            "Decision_Making_Problems",
            "Do you have difficulties with decision-making?",
        ),
        yes_no(
            "Behavioral_Changes",
            "Have you noticed significant behavioral changes?",
        ),
        yes_no("Mood_Swings", "Do you experience frequent mood swings?"),
        yes_no(
            "Apathy",
            "Do you feel a lack of motivation or interest in activities?",
        ),
        yes_no("Difficulty_Walking", "Do you experience difficulties walking?"),
        yes_no("Tremors", "Do you experience tremors?"),
        yes_no(
            "Speech_Difficulties",
            "Do you have difficulties speaking or communicating?",
        ),
        yes_no(
            "Swallowing_Difficulties",
            "Do you experience problems with swallowing?",
        ),
        yes_no("Vision_Problems", "Do you have vision problems?"),
        yes_no("Sleep_Disturbances", "Do you experience sleep disturbances?"),
        yes_no("Smell_Loss", "Have you noticed a loss of sense of smell?"),
        yes_no(
            "Handwriting_Changes",
            "Have you noticed changes in your handwriting?",
        ),
        yes_no("Frequent_Falls", "Do you experience frequent falls?"),
        yes_no("Muscle_Stiffness", "Do you experience muscle stiffness?"),
        yes_no("Light_Sensitivity", "Are you sensitive to light?"),
        yes_no(
            "Visual_Hallucinations",
            "Do you experience visual hallucinations?",
        ),
        yes_no(
            "Word_Finding_Difficulty",
            "Do you have trouble finding the right words?",
        ),
        yes_no(
            "Emotional_Outbursts",
            "Do you experience sudden emotional outbursts?",
        ),
        yes_no(
            "Empathy_Loss",
            "Have you noticed a decreased ability to empathize?",
        ),
        yes_no(
            "Excessive_Daytime_Sleepiness",
            "Do you experience excessive daytime sleepiness?",
        ),
    ]
}

fn movement() -> Vec<Question> {
    vec![
        age("Age", 0.0, 100.0),
        gender("Gender"),
        Question::choice(
            "Tremor_Type",
            "When do your tremors occur?",
            ["At rest", "During movement", "Both", "None"],
        ),
        Question::choice(
            "Affected_Body_Part",
            "Which body part is most affected?",
            ["Hands", "Head", "Legs", "Voice", "Whole body"],
        ),
        yes_no(
            "Involuntary_Contractions",
            "Do you experience involuntary muscle contractions?",
        ),
        yes_no("Muscle_Stiffness", "Do you experience muscle stiffness?"),
        yes_no("Balance_Problems", "Do you have problems keeping your balance?"),
        yes_no(
            "Motor_Or_Vocal_Tics",
            "Do you experience repetitive motor or vocal tics?",
        ),
        yes_no(
            "Urge_To_Move_Legs",
            "Do you feel an urge to move your legs, especially at night?",
        ),
        yes_no(
            "Improves_With_Alcohol",
            "Do your symptoms improve after drinking alcohol?",
        ),
        yes_no(
            "Family_History",
            "Do you have a family history of movement disorders?",
        ),
        Question::numeric(
            "Symptom_Duration (Years)",
            "How long have you had these symptoms (in years)?",
            0.0,
            80.0,
        ),
    ]
}

fn cognitive() -> Vec<Question> {
    vec![
        age("Age", 18.0, 100.0),
        gender("Gender"),
        Question::choice(
            "Memory_Lapses",
            "How often do you experience memory lapses?",
            ["Rarely", "Occasionally", "Frequently"],
        ),
        yes_no(
            "Difficulty_Concentrating",
            "Do you have difficulty concentrating?",
        ),
        yes_no(
            "Difficulty_Forming_New_Memories",
            "Do you struggle to form new memories?",
        ),
        yes_no(
            "Head_Injury_History",
            "Have you had a traumatic head injury?",
        ),
        Question::choice(
            "Substance_Use",
            "Do you regularly use any of the following?",
            ["None", "Alcohol", "Drugs", "Both"],
        ),
        yes_no(
            "Personality_Changes",
            "Have others noticed changes in your personality or judgment?",
        ),
        yes_no("Confusion", "Do you experience episodes of confusion?"),
        yes_no(
            "Daily_Life_Impact",
            "Do these difficulties interfere with your daily life?",
        ),
    ]
}

fn seizure() -> Vec<Question> {
    vec![
        age("Age", 0.0, 100.0),
        gender("Gender"),
        Question::numeric(
            "Seizure_Frequency (Per Month)",
            "How many seizures do you have per month?",
            0.0,
            100.0,
        ),
        Question::numeric(
            "Seizure_Duration (Seconds)",
            "How long do your seizures typically last (in seconds)?",
            1.0,
            600.0,
        ),
        Question::choice(
            "Awareness_During_Seizure",
            "How aware are you during a seizure?",
            ["Fully aware", "Impaired", "Unconscious"],
        ),
        yes_no(
            "Body_Stiffening",
            "Does your body stiffen during seizures?",
        ),
        yes_no("Jerking_Movements", "Do you experience jerking movements?"),
        yes_no("Blank_Staring", "Do you have episodes of blank staring?"),
        yes_no(
            "Post_Seizure_Confusion",
            "Are you confused after a seizure?",
        ),
        Question::choice(
            "Seizure_Triggers",
            "What triggers your seizures?",
            ["Stress", "Alcohol", "Fever", "Sleep deprivation", "None"],
        ),
    ]
}

fn psychomatic() -> Vec<Question> {
    vec![
        age("Age", 18.0, 100.0),
        gender("Gender"),
        yes_no(
            "Unexplained_Physical_Symptoms",
            "Do you have physical symptoms without a clear medical cause?",
        ),
        Question::numeric(
            "Worry_About_Health (1-10)",
            "On a scale of 1-10, how much do you worry about your health?",
            1.0,
            10.0,
        ),
        yes_no(
            "Symptoms_Worse_With_Stress",
            "Do your symptoms get worse under stress?",
        ),
        yes_no(
            "Sudden_Loss_Of_Function",
            "Have you experienced sudden weakness or loss of function?",
        ),
        yes_no(
            "Frequent_Doctor_Visits",
            "Do you visit doctors frequently about these symptoms?",
        ),
        Question::choice(
            "Mental_Health",
            "Do you have any mental health conditions?",
            ["None", "Anxiety", "Depression", "Both"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::QuestionKind;

    #[test]
    fn test_every_builtin_set_is_valid() {
        for id in AssessmentId::ALL {
            let questions = match id {
                AssessmentId::General => general(),
                AssessmentId::Dementia => dementia(),
                AssessmentId::Headache => headache(),
                AssessmentId::Movement => movement(),
                AssessmentId::Vision => vision(),
                AssessmentId::Neurodegenerative => neurodegenerative(),
                AssessmentId::Cognitive => cognitive(),
                AssessmentId::Seizure => seizure(),
                AssessmentId::Psychomatic => psychomatic(),
            };
            assert!(QuestionSet::try_new(id.slug(), questions).is_ok(), "{id}");
        }
    }

    #[test]
    fn test_every_set_starts_with_age() {
        for id in AssessmentId::ALL {
            let set = question_set(id);
            assert!(set.questions()[0].is_numeric(), "{id}");
            assert_eq!(set.questions()[0].id().to_lowercase(), "age");
        }
    }

    #[test]
    fn test_headache_wire_identifiers() {
        let set = question_set(AssessmentId::Headache);
        assert_eq!(set.len(), 27);
        assert!(set.contains("Nausea/Vomiting"));
        assert!(set.contains("Stress_Level (%)"));
        assert_eq!(
            set.get(set.position("Headache_Duration (Hours)").unwrap())
                .unwrap()
                .bounds(),
            Some((0.5, 72.0))
        );
    }

    #[test]
    fn test_general_intake_shape() {
        let set = question_set(AssessmentId::General);
        assert_eq!(set.len(), 18);
        assert_eq!(set.get(0).unwrap().bounds(), Some((18.0, 80.0)));
        assert!(matches!(
            set.get(3).unwrap().kind(),
            QuestionKind::Choice { options } if options.len() == 7
        ));
    }

    #[test]
    fn test_dementia_age_floor() {
        let set = question_set(AssessmentId::Dementia);
        assert_eq!(set.get(0).unwrap().bounds(), Some((50.0, 100.0)));
    }
}

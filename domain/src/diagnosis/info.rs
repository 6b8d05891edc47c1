//! Descriptive metadata for known diagnosis labels
//!
//! Lookup is by exact label. Anything not in the table resolves to
//! [`UNSPECIFIED`].

use serde::Serialize;

/// Static description of one diagnosis label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagnosisInfo {
    pub label: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

impl DiagnosisInfo {
    pub fn is_unspecified(&self) -> bool {
        self.category == UNSPECIFIED.category
    }
}

/// Record returned for labels without an entry
pub static UNSPECIFIED: DiagnosisInfo = DiagnosisInfo {
    label: "",
    category: "Unspecified",
    description: "Please consult with a healthcare provider for detailed information about your condition.",
    symptoms: &["Varied symptoms may be present"],
    next_steps: &[
        "Consult healthcare provider",
        "Keep symptom diary",
        "Follow up regularly",
    ],
};

/// Look up a label, falling back to [`UNSPECIFIED`] on a miss
pub fn describe(label: &str) -> &'static DiagnosisInfo {
    DIAGNOSES
        .iter()
        .find(|info| info.label == label)
        .unwrap_or(&UNSPECIFIED)
}

/// All known labels belonging to `category`, in table order
pub fn labels_in(category: &str) -> impl Iterator<Item = &'static str> + '_ {
    DIAGNOSES
        .iter()
        .filter(move |info| info.category == category)
        .map(|info| info.label)
}

const VISION: &str = "Vision Disorder";
const COGNITIVE: &str = "Cognitive Disorder";
const MOVEMENT: &str = "Movement Disorder";
const HEADACHE: &str = "Headache";
const SEIZURE: &str = "Seizure";
const NEUROLOGICAL: &str = "Neurological Disorder";

static DIAGNOSES: &[DiagnosisInfo] = &[
    // Vision
    DiagnosisInfo {
        label: "Optic Neuritis",
        category: VISION,
        description: "Inflammation of the optic nerve, often causing pain and temporary vision loss in one eye.",
        symptoms: &[
            "Pain with eye movement",
            "Blurred or dimmed vision",
            "Color vision changes",
            "Loss of vision in one eye",
        ],
        next_steps: &[
            "Neurological evaluation (rule out multiple sclerosis)",
            "MRI imaging",
            "Corticosteroid therapy",
            "Monitor for recurrence",
        ],
    },
    DiagnosisInfo {
        label: "Hemianopia",
        category: VISION,
        description: "Loss of vision in half of the visual field in one or both eyes, often caused by brain injury or stroke.",
        symptoms: &[
            "Blindness in half of the visual field",
            "Difficulty navigating spaces",
            "Bumping into objects on the affected side",
        ],
        next_steps: &[
            "Neurological consultation",
            "Imaging studies (MRI/CT)",
            "Vision therapy or rehabilitation",
            "Identify and manage underlying cause",
        ],
    },
    DiagnosisInfo {
        label: "Nystagmus",
        category: VISION,
        description: "Involuntary, repetitive eye movements that can affect vision and depth perception.",
        symptoms: &[
            "Involuntary eye movements",
            "Blurred or unstable vision",
            "Dizziness or balance issues",
        ],
        next_steps: &[
            "Ophthalmologist or neurologist consultation",
            "Underlying condition evaluation",
            "Corrective lenses or prisms",
            "Surgical or medical treatment if needed",
        ],
    },
    DiagnosisInfo {
        label: "Charles Bonnet Syndrome",
        category: VISION,
        description: "A condition in which visually impaired individuals experience visual hallucinations.",
        symptoms: &[
            "Complex visual hallucinations",
            "Hallucinations are not distressing",
            "Normal cognitive function",
        ],
        next_steps: &[
            "Ophthalmologist evaluation",
            "Reassurance and education about the condition",
            "Manage underlying vision loss",
            "Referral to a specialist if hallucinations worsen",
        ],
    },
    DiagnosisInfo {
        label: "Prosopagnosia",
        category: VISION,
        description: "Also known as face blindness, this condition impairs the ability to recognize familiar faces.",
        symptoms: &[
            "Difficulty recognizing faces",
            "Reliance on other cues (e.g., voice, clothing)",
            "Normal vision otherwise",
        ],
        next_steps: &[
            "Neurological assessment",
            "Cognitive testing",
            "Compensatory strategies (e.g., using contextual clues)",
            "Support groups or therapy for coping",
        ],
    },
    DiagnosisInfo {
        label: "Glaucoma",
        category: VISION,
        description: "A group of eye conditions that damage the optic nerve, often due to high intraocular pressure, leading to vision loss.",
        symptoms: &[
            "Gradual loss of peripheral vision",
            "Tunnel vision (in advanced stages)",
            "Eye pain or pressure (acute cases)",
            "Blurred vision",
        ],
        next_steps: &[
            "Regular eye exams to monitor pressure",
            "Medications to lower intraocular pressure",
            "Laser or surgical treatment if needed",
            "Lifestyle modifications to protect vision",
        ],
    },
    // Cognitive
    DiagnosisInfo {
        label: "Mild Cognitive Impairment (MCI)",
        category: COGNITIVE,
        description: "A condition involving noticeable, measurable decline in cognitive abilities that does not interfere significantly with daily life.",
        symptoms: &[
            "Memory lapses",
            "Difficulty concentrating",
            "Struggling with complex tasks",
            "Increased forgetfulness",
        ],
        next_steps: &[
            "Neurological evaluation",
            "Cognitive testing",
            "Regular monitoring",
            "Lifestyle changes (e.g., mental exercises, physical activity)",
        ],
    },
    DiagnosisInfo {
        label: "Amnestic Syndrome",
        category: COGNITIVE,
        description: "A condition characterized by severe memory loss, often caused by brain damage or disease, while other cognitive functions remain intact.",
        symptoms: &[
            "Severe memory impairment",
            "Difficulty forming new memories",
            "Preservation of long-term memory",
            "Normal reasoning and language skills",
        ],
        next_steps: &[
            "Neurological evaluation and imaging",
            "Identify and treat underlying cause",
            "Rehabilitation and memory aids",
            "Supportive therapy",
        ],
    },
    DiagnosisInfo {
        label: "TBI-related Cognitive Disorder",
        category: COGNITIVE,
        description: "Cognitive impairments resulting from traumatic brain injury (TBI), affecting memory, attention, and executive functions.",
        symptoms: &[
            "Memory problems",
            "Difficulty focusing",
            "Impaired problem-solving",
            "Emotional instability",
        ],
        next_steps: &[
            "Neurological evaluation",
            "Cognitive rehabilitation",
            "Occupational therapy",
            "Address underlying psychological issues (e.g., depression, PTSD)",
        ],
    },
    DiagnosisInfo {
        label: "Substance-Induced Cognitive Disorder",
        category: COGNITIVE,
        description: "Cognitive impairments caused by chronic substance use or exposure, affecting memory, attention, and decision-making.",
        symptoms: &[
            "Memory lapses",
            "Difficulty concentrating",
            "Slowed thinking",
            "Behavioral changes",
        ],
        next_steps: &[
            "Discontinuation of substance use",
            "Detoxification and rehabilitation",
            "Cognitive therapy",
            "Lifestyle changes to support brain health",
        ],
    },
    DiagnosisInfo {
        label: "Frontal Lobe Syndrome",
        category: COGNITIVE,
        description: "A condition caused by damage to the frontal lobe, affecting behavior, personality, and executive functioning.",
        symptoms: &[
            "Personality changes",
            "Impaired judgment",
            "Loss of social inhibitions",
            "Difficulty with planning and organization",
        ],
        next_steps: &[
            "Neurological evaluation",
            "Brain imaging studies",
            "Behavioral therapy",
            "Occupational therapy for daily functioning",
        ],
    },
    DiagnosisInfo {
        label: "Wernicke-Korsakoff Syndrome",
        category: COGNITIVE,
        description: "A condition caused by thiamine (vitamin B1) deficiency, often linked to alcohol abuse, leading to memory loss and confusion.",
        symptoms: &[
            "Confusion",
            "Memory impairment",
            "Loss of coordination",
            "Hallucinations (in severe cases)",
        ],
        next_steps: &[
            "Immediate thiamine supplementation",
            "Address underlying cause (e.g., alcohol cessation)",
            "Nutritional support",
            "Rehabilitation for memory and motor functions",
        ],
    },
    // Movement
    DiagnosisInfo {
        label: "Essential Tremor",
        category: MOVEMENT,
        description: "A neurological condition causing rhythmic shaking, often affecting the hands, head, or voice.",
        symptoms: &[
            "Shaking in hands, head, or voice",
            "Worsened by movement",
            "Improves with alcohol in some cases",
        ],
        next_steps: &[
            "Neurologist evaluation",
            "Medications (e.g., beta-blockers)",
            "Lifestyle modifications",
            "Surgical options (in severe cases)",
        ],
    },
    DiagnosisInfo {
        label: "Dystonia",
        category: MOVEMENT,
        description: "A condition causing involuntary muscle contractions, leading to repetitive movements or abnormal postures.",
        symptoms: &[
            "Involuntary muscle contractions",
            "Twisting or repetitive movements",
            "Painful muscle spasms",
        ],
        next_steps: &[
            "Consult movement disorder specialist",
            "Botox injections",
            "Physical and occupational therapy",
            "Medications (e.g., muscle relaxants)",
        ],
    },
    DiagnosisInfo {
        label: "Ataxia",
        category: MOVEMENT,
        description: "A condition characterized by a lack of muscle control and coordination, often due to damage to the cerebellum.",
        symptoms: &[
            "Impaired coordination",
            "Unsteady gait",
            "Difficulty with fine motor tasks",
            "Slurred speech",
        ],
        next_steps: &[
            "Neurological evaluation",
            "Physical therapy",
            "Speech therapy",
            "Management of underlying cause",
        ],
    },
    DiagnosisInfo {
        label: "Tourette Syndrome",
        category: MOVEMENT,
        description: "A neurological disorder characterized by repetitive, involuntary movements and vocalizations called tics.",
        symptoms: &[
            "Motor tics (e.g., blinking, jerking movements)",
            "Vocal tics (e.g., grunting, throat clearing)",
            "Worsening with stress or excitement",
        ],
        next_steps: &[
            "Behavioral therapy",
            "Medications (if severe)",
            "Education and support groups",
            "Relaxation techniques",
        ],
    },
    DiagnosisInfo {
        label: "Restless Legs Syndrome",
        category: MOVEMENT,
        description: "A condition causing an uncontrollable urge to move the legs, often accompanied by uncomfortable sensations.",
        symptoms: &[
            "Urge to move legs",
            "Worse during inactivity or at night",
            "Temporary relief with movement",
            "Sleep disturbances",
        ],
        next_steps: &[
            "Neurological evaluation",
            "Medications (e.g., dopamine agonists)",
            "Improved sleep hygiene",
            "Iron supplements (if deficient)",
        ],
    },
    // Headache
    DiagnosisInfo {
        label: "Migraine",
        category: HEADACHE,
        description: "Recurring headaches with intense throbbing pain and sensory sensitivity.",
        symptoms: &[
            "Pulsating pain",
            "Light/sound sensitivity",
            "Nausea",
            "Visual aura",
        ],
        next_steps: &[
            "Headache diary",
            "Trigger identification",
            "Preventive medication",
            "Lifestyle changes",
        ],
    },
    DiagnosisInfo {
        label: "Cluster",
        category: HEADACHE,
        description: "Severe and recurring headaches, often around one eye, with possible tearing or nasal congestion.",
        symptoms: &[
            "Intense pain around one eye",
            "Tearing",
            "Nasal congestion",
            "Restlessness",
        ],
        next_steps: &[
            "Consult neurologist",
            "Oxygen therapy",
            "Medications (e.g., triptans)",
            "Avoid triggers",
        ],
    },
    DiagnosisInfo {
        label: "Medication Overuse",
        category: HEADACHE,
        description: "Chronic headaches caused by frequent or excessive use of headache medications.",
        symptoms: &[
            "Daily headaches",
            "Worsening headache with medication use",
            "Dependence on pain relievers",
        ],
        next_steps: &[
            "Reduce medication use",
            "Consult physician",
            "Preventive therapy",
            "Behavioral changes",
        ],
    },
    DiagnosisInfo {
        label: "New Daily Persistent",
        category: HEADACHE,
        description: "Headaches that start suddenly and become persistent, lasting for months or more.",
        symptoms: &[
            "Constant daily headache",
            "Moderate to severe pain",
            "Pressure-like or throbbing sensation",
        ],
        next_steps: &[
            "Consult headache specialist",
            "Imaging studies (MRI/CT scan)",
            "Medications (e.g., antidepressants)",
            "Physical therapy",
        ],
    },
    DiagnosisInfo {
        label: "Post-Traumatic",
        category: HEADACHE,
        description: "Headaches caused by head trauma or injury, occurring days to weeks after the incident.",
        symptoms: &[
            "Head pain after trauma",
            "Dizziness",
            "Memory problems",
            "Fatigue",
        ],
        next_steps: &[
            "Rest and recovery",
            "Pain management",
            "Cognitive therapy",
            "Follow-up with neurologist",
        ],
    },
    DiagnosisInfo {
        label: "Tension-Type",
        category: HEADACHE,
        description: "Common headaches characterized by mild to moderate pain, often described as a tight band around the head.",
        symptoms: &[
            "Mild to moderate pain",
            "Tightness or pressure sensation",
            "Pain on both sides of the head",
            "Neck/shoulder tension",
        ],
        next_steps: &[
            "Stress management",
            "Physical therapy",
            "Over-the-counter pain relievers",
            "Regular exercise",
        ],
    },
    // Seizure
    DiagnosisInfo {
        label: "Focal Aware",
        category: SEIZURE,
        description: "A type of seizure that originates in one area of the brain, during which the person remains fully aware.",
        symptoms: &[
            "Localized twitching or jerking",
            "Unusual sensory experiences (e.g., tingling, smells, tastes)",
            "Emotional changes (e.g., fear, deja vu)",
        ],
        next_steps: &[
            "Consult neurologist",
            "EEG testing",
            "Medications (e.g., anti-epileptics)",
            "Lifestyle management to avoid triggers",
        ],
    },
    DiagnosisInfo {
        label: "Focal Impaired Awareness",
        category: SEIZURE,
        description: "A type of seizure that originates in one area of the brain, during which the person’s awareness is impaired.",
        symptoms: &[
            "Blank stare or unresponsiveness",
            "Automatisms (e.g., lip-smacking, hand movements)",
            "Confusion after the seizure",
        ],
        next_steps: &[
            "Neurological evaluation",
            "MRI/CT imaging",
            "Seizure management medications",
            "Monitor for patterns or triggers",
        ],
    },
    DiagnosisInfo {
        label: "Absence",
        category: SEIZURE,
        description: "A type of generalized seizure often characterized by brief, sudden lapses in awareness, usually lasting a few seconds.",
        symptoms: &[
            "Blank stare",
            "Sudden stop in activity",
            "No response during the episode",
            "May appear as daydreaming",
        ],
        next_steps: &[
            "Pediatric or adult neurology consult",
            "EEG testing to confirm",
            "Anti-epileptic medications",
            "Regular follow-ups for medication adjustments",
        ],
    },
    DiagnosisInfo {
        label: "Tonic-Clonic",
        category: SEIZURE,
        description: "A generalized seizure involving a loss of consciousness, stiffening of muscles (tonic phase), and rhythmic jerking (clonic phase).",
        symptoms: &[
            "Loss of consciousness",
            "Body stiffening",
            "Jerking movements",
            "Possible tongue-biting or incontinence",
        ],
        next_steps: &[
            "Emergency care during the seizure",
            "Neurologist consultation",
            "Seizure medications",
            "Safety measures to prevent injury",
        ],
    },
    DiagnosisInfo {
        label: "Myoclonic",
        category: SEIZURE,
        description: "A type of seizure characterized by sudden, brief jerking or twitching movements, typically involving muscles on both sides of the body.",
        symptoms: &[
            "Sudden muscle jerks",
            "Brief and rapid movements",
            "Occur without warning",
            "May cluster in a short time frame",
        ],
        next_steps: &[
            "Neurological evaluation",
            "EEG testing for diagnosis",
            "Medications like valproic acid",
            "Lifestyle modifications to reduce triggers",
        ],
    },
    // Neurological (Parkinson's and Huntington's live here, not under Movement)
    DiagnosisInfo {
        label: "Parkinson's Disease",
        category: NEUROLOGICAL,
        description: "A progressive disorder of the nervous system that affects movement and can lead to tremors, stiffness, and slowed movement.",
        symptoms: &[
            "Tremors",
            "Muscle stiffness",
            "Bradykinesia (slowed movement)",
            "Impaired balance and coordination",
        ],
        next_steps: &[
            "Neurologist consultation",
            "Medications (e.g., levodopa/carbidopa)",
            "Physical therapy",
            "Deep brain stimulation (if advanced)",
        ],
    },
    DiagnosisInfo {
        label: "ALS (Amyotrophic Lateral Sclerosis)",
        category: NEUROLOGICAL,
        description: "A progressive disease that affects nerve cells in the brain and spinal cord, leading to loss of muscle control.",
        symptoms: &[
            "Muscle weakness",
            "Difficulty speaking or swallowing",
            "Twitching or cramping muscles",
            "Progressive paralysis",
        ],
        next_steps: &[
            "Neurologist evaluation",
            "Supportive therapies (e.g., physical, speech therapy)",
            "Assistive devices for mobility",
            "Symptom management with medications (e.g., riluzole)",
        ],
    },
    DiagnosisInfo {
        label: "Huntington's Disease",
        category: NEUROLOGICAL,
        description: "A genetic disorder that causes the progressive breakdown of nerve cells in the brain, affecting movement, cognition, and behavior.",
        symptoms: &[
            "Involuntary jerking or writhing movements",
            "Difficulty with coordination and balance",
            "Cognitive decline",
            "Mood and personality changes",
        ],
        next_steps: &[
            "Genetic testing and counseling",
            "Symptom management",
            "Physical and occupational therapy",
            "Emotional and psychological support",
        ],
    },
    DiagnosisInfo {
        label: "Frontotemporal Dementia",
        category: NEUROLOGICAL,
        description: "A group of disorders caused by progressive nerve cell loss in the brain’s frontal or temporal lobes, affecting behavior, language, and personality.",
        symptoms: &[
            "Personality and behavior changes",
            "Language difficulties",
            "Impaired judgment",
            "Loss of social inhibitions",
        ],
        next_steps: &[
            "Neurological evaluation",
            "Behavioral therapy",
            "Support for caregivers",
            "Speech and language therapy (if needed)",
        ],
    },
    DiagnosisInfo {
        label: "PSP (Progressive Supranuclear Palsy)",
        category: NEUROLOGICAL,
        description: "A rare brain disorder that causes problems with balance, movement, and eye movements, as well as cognitive difficulties.",
        symptoms: &[
            "Difficulty with balance and walking",
            "Frequent falls",
            "Problems with eye movement",
            "Speech and swallowing difficulties",
        ],
        next_steps: &[
            "Neurologist consultation",
            "Physical therapy for mobility",
            "Speech therapy",
            "Medications for symptom relief (e.g., Parkinsonian drugs)",
        ],
    },
    DiagnosisInfo {
        label: "MSA (Multiple System Atrophy)",
        category: NEUROLOGICAL,
        description: "A rare, progressive neurodegenerative disorder affecting autonomic functions like blood pressure, as well as movement.",
        symptoms: &[
            "Impaired movement and coordination",
            "Low blood pressure (orthostatic hypotension)",
            "Bladder dysfunction",
            "Speech and swallowing difficulties",
        ],
        next_steps: &[
            "Neurological evaluation",
            "Medications to manage symptoms (e.g., blood pressure support)",
            "Physical therapy",
            "Assistive devices for mobility and daily tasks",
        ],
    },
    DiagnosisInfo {
        label: "CBD (Corticobasal Degeneration)",
        category: NEUROLOGICAL,
        description: "A rare progressive disorder characterized by problems with movement, coordination, and cognition due to brain cell degeneration.",
        symptoms: &[
            "Asymmetric movement difficulties",
            "Muscle stiffness and rigidity",
            "Involuntary jerking movements",
            "Cognitive and language issues",
        ],
        next_steps: &[
            "Neurologist evaluation",
            "Physical and occupational therapy",
            "Speech therapy (if needed)",
            "Medications to manage symptoms (e.g., muscle relaxants)",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unknown_label_falls_back() {
        let info = describe("NotARealLabel");
        assert_eq!(info.category, "Unspecified");
        assert!(info.is_unspecified());
        assert_eq!(info.symptoms, &["Varied symptoms may be present"]);
        assert_eq!(
            info.next_steps,
            &[
                "Consult healthcare provider",
                "Keep symptom diary",
                "Follow up regularly"
            ]
        );
    }

    #[test]
    fn test_migraine_is_headache() {
        let info = describe("Migraine");
        assert_eq!(info.category, "Headache");
        assert_eq!(info.symptoms.len(), 4);
        assert!(!info.is_unspecified());
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(describe("migraine").is_unspecified());
        assert!(describe(" Migraine").is_unspecified());
    }

    #[test]
    fn test_labels_are_unique() {
        let mut seen = HashSet::new();
        for info in DIAGNOSES {
            assert!(seen.insert(info.label), "duplicate {}", info.label);
        }
    }

    #[test]
    fn test_parkinsons_uses_neurological_entry() {
        assert_eq!(describe("Parkinson's Disease").category, "Neurological Disorder");
        assert_eq!(describe("Huntington's Disease").category, "Neurological Disorder");
    }

    #[test]
    fn test_labels_in_category() {
        let seizures: Vec<_> = labels_in("Seizure").collect();
        assert_eq!(
            seizures,
            vec!["Focal Aware", "Focal Impaired Awareness", "Absence", "Tonic-Clonic", "Myoclonic"]
        );
    }
}

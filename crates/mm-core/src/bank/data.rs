//! Static question data, numbered in bank order.

use crate::question::Question;

/// Every question in the bank (question number = index + 1).
pub static QUESTIONS: [Question; 100] = [
    // Vocabulary and word meaning (1-25)
    Question::new(
        "Which word does not have a similar meaning to 'imaginary'?",
        ["inconsistent", "fictional", "illusive", "apocryphal"],
        1,
    ),
    Question::new(
        "Which word does not have a similar meaning to 'fatigued'?",
        ["enervated", "strength", "tired", "exhaustion"],
        2,
    ),
    Question::new(
        "Which word does not have a similar meaning to 'beautiful'?",
        ["elegant", "stunning", "grotesque", "exquisite"],
        3,
    ),
    Question::new(
        "Find two words, one from each group, that are closest in meaning: Group A: Confused, enraged, terrified Group B: Calm, trance, incensed",
        ["confused and calm", "terrified and trance", "enraged and calm", "enraged and incensed"],
        4,
    ),
    Question::new(
        "Which word means 'having been deserted or left'?",
        ["abandoned", "deluded", "truant", "mindful"],
        1,
    ),
    Question::new(
        "Which word can be used to describe the part of the body that contains all structures between the chest and pelvis?",
        ["pleural", "abdominal", "articular", "wreathed"],
        2,
    ),
    Question::new(
        "Which word is most similar in meaning to 'betraying'?",
        ["faithful", "loyal", "treacherous", "steadfast"],
        3,
    ),
    Question::new(
        "Which word means 'a lack of generosity or willingness to share'?",
        ["altruistic", "bountiful", "charitable", "miserly"],
        4,
    ),
    Question::new(
        "Which word means 'to damage or destroy secretly'?",
        ["sabotaged", "repaired", "enhanced", "constructed"],
        1,
    ),
    Question::new(
        "Which word means 'the act of thinking deeply or carefully about something'?",
        ["dismissal", "deliberation", "ignorance", "neglect"],
        2,
    ),
    Question::new(
        "Which word means 'the act of giving up or surrendering something'?",
        ["persistence", "resistance", "abandonment", "defiance"],
        3,
    ),
    Question::new(
        "Which word does not have a similar meaning to 'honorable'?",
        ["ethical", "principled", "moral", "deceitful"],
        4,
    ),
    Question::new(
        "What is the opposite of 'believable'?",
        ["incredulous", "plausible", "credible", "trustworthy"],
        1,
    ),
    Question::new(
        "Which word means 'a person who gives disapproval'?",
        ["admirer", "critic", "supporter", "advocate"],
        2,
    ),
    Question::new(
        "Which word does not belong with the others?",
        ["spaghetti", "macaroni", "pancake", "pasta"],
        3,
    ),
    Question::new(
        "Which word means 'acceptable, fair, or good enough'?",
        ["unacceptable", "inadequate", "insufficient", "satisfactory"],
        4,
    ),
    Question::new(
        "What is the opposite of 'respectful'?",
        ["disrespectful", "considerate", "polite", "courteous"],
        1,
    ),
    Question::new(
        "Which word means 'a sense of pride or pleasure'?",
        ["disappointment", "satisfaction", "frustration", "dissatisfaction"],
        2,
    ),
    Question::new(
        "Which word does not mean 'something that can be questioned'?",
        ["disputable", "debatable", "certainty", "questionable"],
        3,
    ),
    Question::new(
        "Which word means 'ethical, fair, and principled'?",
        ["dishonest", "corrupt", "unethical", "honourable"],
        4,
    ),
    Question::new(
        "Which word means 'the process of carefully considering something before making a decision'?",
        ["contemplation", "impulsiveness", "recklessness", "haste"],
        1,
    ),
    Question::new(
        "Which word means 'the act of giving freely without expecting anything in return'?",
        ["stinginess", "generosity", "selfishness", "greed"],
        2,
    ),
    Question::new(
        "Which word does not have a similar meaning to 'belittle'?",
        ["criticise", "downgrade", "overrate", "discredit"],
        3,
    ),
    Question::new(
        "Which word means 'a sense of pride or pleasure derived from achievement'?",
        ["disappointment", "frustration", "dissatisfaction", "satisfaction"],
        4,
    ),
    Question::new(
        "Which word does not have a similar meaning to 'important'?",
        ["miniature", "significant", "imperative", "of substance"],
        1,
    ),
    // Grammar (26-40)
    Question::new(
        "Which sentence is grammatically correct?",
        ["We regret to be in contact with you shortly.", "We will be in contact with you shortly.", "Shortly, we will be in contract with you.", "Will be in contract with you shortley."],
        2,
    ),
    Question::new(
        "Which sentence is grammatically correct?",
        ["I wishes you the very best of luck.", "Our holiday as been postponed.", "It is difficult to understand my teacher.", "The Government are implementing a new law today."],
        3,
    ),
    Question::new(
        "Which sentence is grammatically correct?",
        ["Every days he bring me flowers.", "Every days he brings me flower.", "Every day he bringing me flowers.", "Every day he brings me flowers."],
        4,
    ),
    Question::new(
        "Choose the grammatically correct option:",
        ["Prior to the airplane taking off, the pilot informs about safety procedures.", "The pilot the helicopter back to basecamp due terrential winds.", "Prior to the airplane taking off, the informs about safety.", "The pilot navigate the plane through stormy weather."],
        1,
    ),
    Question::new(
        "Which sentence is grammatically correct?",
        ["The firefighter service are more than just putting out fires.", "The firefighter service is more than just putting out fires.", "Firefighters service is more than just putting out fire.", "The firefighters service is more than just putting out fires."],
        2,
    ),
    Question::new(
        "Which sentence is grammatically correct?",
        ["The queen are bout to give a speech.", "The queen was about too give a speech.", "The queen is about to give a speech.", "The queen will giving a speech."],
        3,
    ),
    Question::new(
        "Identify the grammatically correct sentence:",
        ["Every day he bring me flowers.", "Every days he brings me flower.", "Every day he bringing me flowers.", "Every day he brings me flowers."],
        4,
    ),
    Question::new(
        "Which combination of words can be inserted into the sentence? 'We regret to inform you that your application was ____________.'",
        ["unsuccessful", "success", "succeeding", "succeed"],
        1,
    ),
    Question::new(
        "Which sentence is grammatically correct?",
        ["The fire departments provides emergency services.", "The fire department provides emergency services.", "Fire departments provide emergency services.", "The fire department are providing emergency services."],
        2,
    ),
    Question::new(
        "Which sentence is grammatically correct?",
        ["The police has new suspect.", "The police as a new lead.", "The police have a new suspect.", "The police not have any leads to go on."],
        3,
    ),
    Question::new(
        "Insert the correct combination of words into the sentence: 'Law is the system of rules, guidelines, and conducts established by the ______ government that maintains a safe and stable society.'",
        ["generous", "friendly", "vulgar", "sovereign"],
        4,
    ),
    Question::new(
        "Which combination of words completes the sentence correctly? 'A lawyer is a person that is learned in law; whether that be as an ______, counsel, or solicitor.'",
        ["attorney", "generous", "friendly", "vulgar"],
        1,
    ),
    Question::new(
        "Which combination of words can be inserted into the sentence? 'We are pleased to inform you that your application has been ____________.'",
        ["rejected", "accepted", "pending", "reviewed"],
        2,
    ),
    Question::new(
        "Which sentence is grammatically correct?",
        ["She always bring me coffee in the morning.", "She always bringing me coffee in the morning.", "She always brings me coffee in the morning.", "She always brings me coffee in the mornings."],
        3,
    ),
    Question::new(
        "Which sentence is grammatically correct?",
        ["The police departments maintains public safety.", "Police departments maintain public safety.", "The police department are maintaining public safety.", "The police department maintains public safety."],
        4,
    ),
    // Number sequences (41-55)
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 1, 4, 9, 16, 25, 36, 49",
        ["64, 81", "63, 74", "51, 80", "54, 63"],
        1,
    ),
    Question::new(
        "What comes next in this sequence? 0, 1, 1, 2, 3, 5, 8",
        ["12, 18", "13, 21", "15, 25", "15, 23"],
        2,
    ),
    Question::new(
        "What is the next pair in the sequence? 27, 25, 87, 23, 21, 87, 19",
        ["16, 87", "87, 17", "17, 87", "16, 13"],
        3,
    ),
    Question::new(
        "Complete the sequence: 1, 3, 7, 15, 31, 63, 127",
        ["220, 440", "136, 210", "187, 316", "255, 511"],
        4,
    ),
    Question::new(
        "What comes next? 1, 3, 6, 10, 15, 21, 28",
        ["36, 45", "42, 56", "42, 48", "30, 36"],
        1,
    ),
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 2, 4, 8, 16, 32, 64",
        ["120, 240", "128, 256", "130, 260", "140, 280"],
        2,
    ),
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 1, 4, 9, 16, 25, 36",
        ["45, 60", "50, 65", "49, 64", "55, 70"],
        3,
    ),
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 1, 3, 6, 10, 15, 21",
        ["25, 30", "30, 40", "35, 45", "28, 36"],
        4,
    ),
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 2, 5, 10, 17, 26, 37",
        ["50, 65", "45, 60", "55, 70", "60, 75"],
        1,
    ),
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 1, 2, 4, 7, 11, 16",
        ["20, 25", "22, 29", "25, 30", "30, 35"],
        2,
    ),
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 3, 6, 12, 24, 48, 96",
        ["180, 360", "200, 400", "192, 384", "220, 440"],
        3,
    ),
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 1, 5, 13, 29, 61, 125",
        ["250, 500", "260, 520", "270, 540", "253, 509"],
        4,
    ),
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 1, 4, 9, 16, 25, 36",
        ["49, 64", "45, 60", "50, 65", "55, 70"],
        1,
    ),
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 2, 6, 12, 20, 30, 42",
        ["50, 60", "56, 72", "60, 70", "70, 80"],
        2,
    ),
    Question::new(
        "Look carefully for the pattern, and then choose which pair of numbers comes next: 1, 3, 7, 15, 31, 63",
        ["120, 240", "130, 260", "127, 255", "140, 280"],
        3,
    ),
    // Ratios (56-70)
    Question::new(
        "Peter has £15.20, and Jim has £20.80. What is the ratio of Peter's money to Jim's money in its simplest form?",
        ["15:20", "38:52", "10:13", "19:26"],
        4,
    ),
    Question::new(
        "A newspaper includes 16 pages of sport and 8 pages of TV. What is the ratio of sport to TV?",
        ["2:1", "1:2", "4:1", "3:1"],
        1,
    ),
    Question::new(
        "A magazine includes 24 pages of fashion and 8 pages of lifestyle. What is the ratio of fashion to lifestyle?",
        ["2:1", "3:1", "1:3", "4:1"],
        2,
    ),
    Question::new(
        "A book contains 240 pages for its novel and 24 pages for introductions and summaries. What is the ratio of novel pages to introductions and summaries?",
        ["5:1", "20:1", "10:1", "1:10"],
        3,
    ),
    Question::new(
        "A school has to mark 180 English papers and 170 Maths papers. What is the ratio of English papers to Maths papers?",
        ["17:18", "9:8", "10:9", "18:17"],
        4,
    ),
    Question::new(
        "A class has 12 boys and 18 girls. What is the ratio of boys to girls in its simplest form?",
        ["2:3", "3:2", "4:6", "6:9"],
        1,
    ),
    Question::new(
        "A bag contains 8 red marbles and 12 blue marbles. What is the ratio of red to blue marbles in its simplest form?",
        ["2:3", "3:2", "4:6", "6:9"],
        2,
    ),
    Question::new(
        "A recipe uses 2 cups of flour and 3 cups of sugar. What is the ratio of flour to sugar in its simplest form?",
        ["4:6", "3:2", "2:3", "6:9"],
        3,
    ),
    Question::new(
        "A garden has 15 roses and 25 tulips. What is the ratio of roses to tulips in its simplest form?",
        ["9:15", "5:3", "6:10", "3:5"],
        4,
    ),
    Question::new(
        "A box contains 20 apples and 30 oranges. What is the ratio of apples to oranges in its simplest form?",
        ["2:3", "3:2", "4:6", "6:9"],
        1,
    ),
    Question::new(
        "A school has 24 teachers and 36 students. What is the ratio of teachers to students in its simplest form?",
        ["2:3", "3:2", "4:6", "6:9"],
        2,
    ),
    Question::new(
        "A store has 16 shirts and 24 pants. What is the ratio of shirts to pants in its simplest form?",
        ["4:6", "3:2", "2:3", "6:9"],
        3,
    ),
    Question::new(
        "A park has 18 trees and 27 bushes. What is the ratio of trees to bushes in its simplest form?",
        ["6:9", "3:2", "4:6", "2:3"],
        4,
    ),
    Question::new(
        "A zoo has 20 lions and 30 tigers. What is the ratio of lions to tigers in its simplest form?",
        ["2:3", "3:2", "4:6", "6:9"],
        1,
    ),
    Question::new(
        "A farm has 14 cows and 21 sheep. What is the ratio of cows to sheep in its simplest form?",
        ["2:3", "3:2", "4:6", "6:9"],
        2,
    ),
    // General knowledge (71-75)
    Question::new(
        "What is the capital of France?",
        ["Lyon", "Marseille", "Paris", "Bordeaux"],
        3,
    ),
    Question::new(
        "Which planet is known as the Red Planet?",
        ["Venus", "Jupiter", "Saturn", "Mars"],
        4,
    ),
    Question::new(
        "Who wrote 'Hamlet'?",
        ["William Shakespeare", "Charles Dickens", "Mark Twain", "Jane Austen"],
        1,
    ),
    Question::new(
        "What is the chemical symbol for water?",
        ["CO₂", "H₂O", "O₂", "NaCl"],
        2,
    ),
    Question::new(
        "Which element has the atomic number 1?",
        ["Helium", "Oxygen", "Hydrogen", "Carbon"],
        3,
    ),
    // Mental math (76-100)
    Question::new(
        "What is 8 multiplied by 6?",
        ["42", "54", "60", "48"],
        4,
    ),
    Question::new(
        "What is 4 multiplied by 7?",
        ["28", "24", "32", "36"],
        1,
    ),
    Question::new(
        "What is 6 multiplied by 9?",
        ["48", "54", "52", "60"],
        2,
    ),
    Question::new(
        "What is 9 multiplied by 9?",
        ["72", "84", "81", "90"],
        3,
    ),
    Question::new(
        "What is 8 multiplied by 7?",
        ["54", "63", "64", "56"],
        4,
    ),
    Question::new(
        "What is 12 multiplied by 6?",
        ["72", "66", "60", "78"],
        1,
    ),
    Question::new(
        "What is 13 multiplied by 7?",
        ["84", "91", "81", "96"],
        2,
    ),
    Question::new(
        "What is 3/4 of 80 plus 1/5 of 75?",
        ["65", "85", "75", "95"],
        3,
    ),
    Question::new(
        "Subtract 1/3 of 90 from 2/5 of 150.",
        ["20", "50", "40", "30"],
        4,
    ),
    Question::new(
        "Multiply 1/2 of 48 by 3/4 of 20.",
        ["360", "420", "480", "540"],
        1,
    ),
    Question::new(
        "What is 25% of 240 minus 15% of 120?",
        ["36", "42", "48", "54"],
        2,
    ),
    Question::new(
        "Add 3/8 of 64 to 5/6 of 36.",
        ["48", "60", "54", "66"],
        3,
    ),
    Question::new(
        "What is 7/10 of 120 minus 2/5 of 50?",
        ["56", "80", "72", "64"],
        4,
    ),
    Question::new(
        "Divide 3/4 of 144 by 2/3 of 36.",
        ["5", "3", "4", "6"],
        1,
    ),
    Question::new(
        "Multiply 5/6 of 72 by 2/3 of 45.",
        ["1350", "1800", "1500", "1650"],
        2,
    ),
    Question::new(
        "What is 40% of 180 plus 60% of 120?",
        ["120", "168", "144", "192"],
        3,
    ),
    Question::new(
        "Subtract 1/4 of 200 from 3/5 of 250.",
        ["80", "140", "120", "100"],
        4,
    ),
    Question::new(
        "What is 5/8 of 160 plus 3/10 of 100?",
        ["130", "120", "140", "150"],
        1,
    ),
    Question::new(
        "Add 2/3 of 90 to 4/5 of 75.",
        ["110", "120", "130", "140"],
        2,
    ),
    Question::new(
        "Multiply 3/4 of 80 by 5/6 of 36.",
        ["600", "540", "1800", "660"],
        3,
    ),
    Question::new(
        "What is 15% of 300 minus 10% of 150?",
        ["25", "30", "35", "40"],
        4,
    ),
    Question::new(
        "Divide 7/10 of 200 by 1/2 of 40.",
        ["7", "6", "8", "9"],
        1,
    ),
    Question::new(
        "What is 3/4 of 108 plus 2/5 of 65?",
        ["105", "100", "110", "107"],
        2,
    ),
    Question::new(
        "Add 3/7 of 63 to 2/3 of 45.",
        ["60", "55", "65", "57"],
        3,
    ),
    Question::new(
        "Subtract 1/4 of 140 from 2/3 of 450.",
        ["250", "270", "280", "265"],
        4,
    ),
];

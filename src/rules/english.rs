//! English rules. Family and topic keywords come before the sentence-opening rules so
//! "I feel sad about my mother" is answered as a family statement, not a feeling.

use super::{Phrasebook, Rule, Trigger};

pub const PHRASEBOOK: Phrasebook = Phrasebook {
    exit_phrases: &["quit", "bye", "goodbye", "exit"],
    farewells: &[
        "Goodbye!",
        "Bye!",
        "See you!",
        "Take care of yourself!",
        "See you later, have a great day!",
        "Catch you soon, don't be a stranger!",
        "Farewell, until we meet again!",
        "Later, hope everything goes well for you!",
        "Don't do anything I wouldn't do!",
        "Logging off like a true 90s modem... goodbye!",
        "May the Wi-Fi be with you!",
        "See you in another timeline!",
        "Vanishing dramatically... poof!",
    ],
    acknowledgement: "Okay, let's speak English.",
    greeting: "Hello! Type to talk to me. Say 'quit' to end the session.",
    fallback: "I'm not sure I understand you fully.",
};

pub const RULES: &[Rule] = &[
    Rule {
        id: "mother",
        triggers: &[Trigger::KeywordSet(&["mother*", "mom", "mum", "mommy", "mummy"])],
        templates: &[
            "Tell me more about your mother. Why do you say {0}?",
            "What was your relationship with your mother like?",
            "How do you feel about your mother?",
            "How does this relate to your feelings today?",
            "Good family relations are important.",
        ],
    },
    Rule {
        id: "father",
        triggers: &[Trigger::KeywordSet(&["father*", "dad", "daddy"])],
        templates: &[
            "Tell me more about your father. Why do you say {0}?",
            "How did your father make you feel?",
            "How do you feel about your father?",
            "Does your relationship with your father relate to your feelings today?",
            "Do you have trouble showing affection with your family?",
        ],
    },
    Rule {
        id: "child",
        triggers: &[Trigger::KeywordSet(&["child*", "kid", "kids"])],
        templates: &[
            "Did you have close friends as a child?",
            "What is your favorite childhood memory?",
            "Do you remember any dreams or nightmares from childhood?",
            "Did the other children sometimes tease you?",
            "How do you think your childhood experiences relate to your feelings today?",
        ],
    },
    Rule {
        id: "friend",
        triggers: &[Trigger::KeywordSet(&["friend*"])],
        templates: &[
            "Tell me more about your friends.",
            "When you think of a friend, what comes to mind?",
            "Why don't you tell me about a childhood friend?",
        ],
    },
    Rule {
        id: "computer",
        triggers: &[Trigger::KeywordSet(&["computer*"])],
        templates: &[
            "Are you really talking about me?",
            "Does it seem strange to talk to a computer?",
            "How do computers make you feel?",
            "Do you feel threatened by computers?",
        ],
    },
    Rule {
        id: "sorry",
        triggers: &[Trigger::KeywordSet(&["sorry", "apologize", "apologise"])],
        templates: &[
            "There are many times when no apology is needed.",
            "What feelings do you have when you apologize?",
        ],
    },
    Rule {
        id: "need",
        triggers: &[Trigger::Prefix("i need")],
        templates: &[
            "Why do you need {0}?",
            "Would it really help you to get {0}?",
            "Are you sure you need {0}?",
            "What is it that you need?",
        ],
    },
    Rule {
        id: "why_dont_you",
        triggers: &[
            Trigger::Prefix("why don't you"),
            Trigger::Prefix("why dont you"),
        ],
        templates: &[
            "Do you really think I don't {0}?",
            "Perhaps I will {0} in the future.",
            "Do you want me to {0}?",
            "What would you like me to do?",
        ],
    },
    Rule {
        id: "why_cant_i",
        triggers: &[Trigger::Prefix("why can't i"), Trigger::Prefix("why cant i")],
        templates: &[
            "Do you think you should be able to {0}?",
            "If you could {0}, what would you do?",
            "I don't know, why can't you {0}?",
            "Have you really tried?",
        ],
    },
    Rule {
        id: "i_cant",
        triggers: &[Trigger::Prefix("i can't"), Trigger::Prefix("i cant")],
        templates: &[
            "How do you know you can't {0}?",
            "Perhaps you could {0} if you tried.",
            "What would it take for you to {0}?",
            "Have you really tried?",
        ],
    },
    Rule {
        id: "i_am",
        triggers: &[Trigger::Prefix("i am")],
        templates: &[
            "Did you come to me because you are {0}?",
            "How long have you been {0}?",
            "How do you feel about being {0}?",
            "Tell me more about how you are.",
        ],
    },
    Rule {
        id: "im",
        triggers: &[Trigger::Prefix("i'm"), Trigger::Prefix("im")],
        templates: &[
            "How does being {0} make you feel?",
            "Do you enjoy being {0}?",
            "Why do you tell me you're {0}?",
            "How long have you felt this way?",
        ],
    },
    Rule {
        id: "are_you",
        triggers: &[Trigger::Prefix("are you")],
        templates: &[
            "Why does it matter whether I am {0}?",
            "Would you prefer if I were not {0}?",
            "Perhaps you believe I am {0}.",
            "I may be {0}, what do you think?",
            "Why are you interested in me?",
        ],
    },
    Rule {
        id: "what",
        triggers: &[Trigger::Prefix("what")],
        templates: &[
            "Why do you ask?",
            "How would an answer to that help you?",
            "What do you think?",
        ],
    },
    Rule {
        id: "how",
        triggers: &[Trigger::Prefix("how")],
        templates: &[
            "How do you suppose?",
            "Perhaps you can answer your own question.",
            "What is it you're really asking?",
        ],
    },
    Rule {
        id: "because",
        triggers: &[Trigger::Prefix("because")],
        templates: &[
            "Is that the real reason?",
            "What other reasons come to mind?",
            "Does that reason apply to anything else?",
            "If {0}, what else must be true?",
        ],
    },
    Rule {
        id: "hello",
        triggers: &[
            Trigger::Prefix("hello"),
            Trigger::Prefix("hi"),
            Trigger::Prefix("hey"),
        ],
        templates: &[
            "Hello... I'm listening.",
            "Hi there... how can I help you?",
            "Hello, how are you feeling today?",
        ],
    },
    Rule {
        id: "i_think",
        triggers: &[Trigger::Literal("i think")],
        templates: &[
            "Do you doubt {0}?",
            "Do you really think so?",
            "But you're not sure {0}?",
        ],
    },
    Rule {
        id: "yes",
        triggers: &[Trigger::Prefix("yes"), Trigger::Prefix("yeah")],
        templates: &["You seem quite sure.", "OK, but can you elaborate a bit?"],
    },
    Rule {
        id: "is_it",
        triggers: &[Trigger::Prefix("is it")],
        templates: &[
            "Do you think it is {0}?",
            "Perhaps it's {0}, what do you think?",
            "If it were {0}, what would you do?",
            "It could well be that {0}.",
            "What do you think it is?",
        ],
    },
    Rule {
        id: "it_is",
        triggers: &[Trigger::Prefix("it is"), Trigger::Prefix("it's")],
        templates: &[
            "You seem very certain.",
            "If I told you that it probably isn't {0}, what would you feel?",
        ],
    },
    Rule {
        id: "can_you",
        triggers: &[Trigger::Prefix("can you")],
        templates: &[
            "What makes you think I can't {0}?",
            "If I could {0}, then what?",
            "Why do you ask if I can {0}?",
            "What would you like me to do?",
        ],
    },
    Rule {
        id: "can_i",
        triggers: &[Trigger::Prefix("can i")],
        templates: &[
            "Perhaps you don't want to {0}.",
            "Do you want to be able to {0}?",
            "If you could {0}, would you?",
            "What is stopping you?",
        ],
    },
    Rule {
        id: "you_are",
        triggers: &[Trigger::Prefix("you are")],
        templates: &[
            "Why do you think I am {0}?",
            "Does it please you to think that I'm {0}?",
            "Perhaps you would like me to be {0}.",
            "Perhaps you're really talking about yourself?",
        ],
    },
    Rule {
        id: "youre",
        triggers: &[Trigger::Prefix("you're"), Trigger::Prefix("youre")],
        templates: &[
            "Why do you say I am {0}?",
            "Why do you think I am {0}?",
            "Are we talking about you, or me?",
        ],
    },
    Rule {
        id: "i_dont",
        triggers: &[Trigger::Prefix("i don't"), Trigger::Prefix("i dont")],
        templates: &[
            "Don't you really {0}?",
            "Why don't you {0}?",
            "Do you want to {0}?",
            "Why not?",
        ],
    },
    Rule {
        id: "i_feel",
        triggers: &[Trigger::Prefix("i feel")],
        templates: &[
            "Good, tell me more about these feelings.",
            "Do you often feel {0}?",
            "When do you usually feel {0}?",
            "When you feel {0}, what do you do?",
        ],
    },
    Rule {
        id: "i_have",
        triggers: &[Trigger::Prefix("i have"), Trigger::Prefix("i've")],
        templates: &[
            "Why do you tell me that you've {0}?",
            "Have you really {0}?",
            "Now that you have {0}, what will you do next?",
            "What else have you got on your mind?",
        ],
    },
    Rule {
        id: "i_would",
        triggers: &[Trigger::Prefix("i would"), Trigger::Prefix("i'd")],
        templates: &[
            "Could you explain why you would {0}?",
            "Why would you {0}?",
            "Who else knows that you would {0}?",
            "What would you do?",
        ],
    },
    Rule {
        id: "is_there",
        triggers: &[Trigger::Prefix("is there")],
        templates: &[
            "Do you think there is {0}?",
            "It's likely that there is {0}.",
            "Would you like there to be {0}?",
            "Do you think there is?",
        ],
    },
    Rule {
        id: "my",
        triggers: &[Trigger::Prefix("my")],
        templates: &[
            "I see, your {0}.",
            "Why do you say that your {0}?",
            "When your {0}, how do you feel?",
            "Tell me more about yourself.",
        ],
    },
    Rule {
        id: "you",
        triggers: &[Trigger::Prefix("you")],
        templates: &[
            "We should be discussing you, not me.",
            "Why do you say that about me?",
            "Why do you care whether I {0}?",
        ],
    },
    Rule {
        id: "why",
        triggers: &[Trigger::Prefix("why")],
        templates: &[
            "Why don't you tell me the reason why {0}?",
            "Why do you think {0}?",
            "Why do you ask?",
        ],
    },
    Rule {
        id: "i_want",
        triggers: &[Trigger::Prefix("i want")],
        templates: &[
            "What would it mean to you if you got {0}?",
            "Why do you want {0}?",
            "What would you do if you got {0}?",
            "If you got {0}, then what would you do?",
            "What is it that you want?",
        ],
    },
    Rule {
        id: "question",
        triggers: &[Trigger::Question],
        templates: &[
            "Why do you ask that?",
            "Please consider whether you can answer your own question.",
            "Perhaps the answer lies within yourself?",
            "Why don't you tell me?",
        ],
    },
    Rule {
        id: "fallback",
        triggers: &[Trigger::Any],
        templates: &[
            "Please tell me more.",
            "Let's change focus a bit... Tell me about your family.",
            "Can you elaborate on that?",
            "Why do you say that {0}?",
            "I see.",
            "Very interesting.",
            "{0}.",
            "I see. And what does that tell you?",
            "How does that make you feel?",
            "How do you feel when you say that?",
        ],
    },
];

//! Swedish rules. Same priority layout as the English bank: family and topic keywords
//! first, then sentence openers, then questions and the catch-all.

use super::{Phrasebook, Rule, Trigger};

pub const PHRASEBOOK: Phrasebook = Phrasebook {
    exit_phrases: &["slut", "hejdå", "hej då", "adjö"],
    farewells: &[
        "Hejdå!",
        "Adjö!",
        "Vi ses!",
        "Ha det bra och ta hand om dig!",
        "Vi hörs senare, ha en fin dag!",
        "På återseende, hoppas allt går bra för dig!",
        "Ses snart, glöm inte att höra av dig!",
        "Ha det gott tills vi ses igen!",
        "Gör inget jag inte skulle göra!",
        "Loggar ut som ett gammalt ICQ-konto... hej då!",
        "Må wifi:t vara med dig!",
        "Vi ses i nästa liv!",
        "Försvinner mystiskt i dimman... poff!",
    ],
    acknowledgement: "Okej, nu pratar vi svenska.",
    greeting: "Hej! Skriv för att prata med mig. Säg 'slut' för att avsluta.",
    fallback: "Jag är inte säker på att jag förstår dig helt.",
};

pub const RULES: &[Rule] = &[
    Rule {
        id: "mother",
        triggers: &[Trigger::KeywordSet(&["mamma*", "mor", "mors", "morsa"])],
        templates: &[
            "Berätta mer om din mamma. Varför säger du att {0}?",
            "Hur var din relation med din mamma?",
            "Hur känner du för din mamma?",
            "Hur hänger det här ihop med hur du känner idag?",
            "Bra familjerelationer är viktiga.",
        ],
    },
    Rule {
        id: "father",
        triggers: &[Trigger::KeywordSet(&["pappa*", "far", "fars", "farsa"])],
        templates: &[
            "Berätta mer om din pappa. Varför säger du att {0}?",
            "Hur fick din pappa dig att känna?",
            "Hur känner du för din pappa?",
            "Relaterar din relation till din pappa till hur du känner idag?",
            "Har du svårt att visa känslor i din familj?",
        ],
    },
    Rule {
        id: "child",
        triggers: &[Trigger::KeywordSet(&["barn*"])],
        templates: &[
            "Hade du nära vänner som barn?",
            "Vilket är ditt favoritminne från barndomen?",
            "Minns du några drömmar eller mardrömmar från barndomen?",
            "Retade de andra barnen dig ibland?",
            "Hur tycker du att dina barndomsupplevelser hänger ihop med hur du känner idag?",
        ],
    },
    Rule {
        id: "friend",
        triggers: &[Trigger::KeywordSet(&["vän*", "kompis*"])],
        templates: &[
            "Berätta mer om dina vänner.",
            "Vad tänker du på när du tänker på en vän?",
            "Varför berättar du inte om en barndomsvän?",
        ],
    },
    Rule {
        id: "computer",
        triggers: &[Trigger::KeywordSet(&["dator*"])],
        templates: &[
            "Pratar du egentligen om mig?",
            "Känns det märkligt att prata med en dator?",
            "Hur får datorer dig att känna?",
            "Känner du dig hotad av datorer?",
        ],
    },
    Rule {
        id: "sorry",
        triggers: &[Trigger::KeywordSet(&["förlåt", "ursäkta"])],
        templates: &[
            "Det finns många tillfällen då en ursäkt inte behövs.",
            "Vilka känslor får du när du ber om ursäkt?",
        ],
    },
    Rule {
        id: "need",
        triggers: &[Trigger::Prefix("jag behöver")],
        templates: &[
            "Varför behöver du {0}?",
            "Skulle det verkligen hjälpa dig att få {0}?",
            "Är du säker på att du behöver {0}?",
            "Vad är det du behöver?",
        ],
    },
    Rule {
        id: "why_dont_you",
        triggers: &[Trigger::Prefix("varför gör du inte")],
        templates: &[
            "Tror du verkligen att jag inte {0}?",
            "Kanske kommer jag att {0} i framtiden.",
            "Vill du att jag ska {0}?",
            "Vad vill du att jag ska göra?",
        ],
    },
    Rule {
        id: "why_cant_i",
        triggers: &[Trigger::Prefix("varför kan jag inte")],
        templates: &[
            "Tycker du att du borde kunna {0}?",
            "Om du kunde {0}, vad skulle du göra då?",
            "Jag vet inte, varför kan du inte {0}?",
            "Har du verkligen försökt?",
        ],
    },
    Rule {
        id: "i_cant",
        triggers: &[Trigger::Prefix("jag kan inte")],
        templates: &[
            "Hur vet du att du inte kan {0}?",
            "Kanske skulle du kunna {0} om du försökte.",
            "Vad skulle krävas för att du ska {0}?",
            "Har du verkligen försökt?",
        ],
    },
    Rule {
        id: "i_am",
        triggers: &[Trigger::Prefix("jag är")],
        templates: &[
            "Kom du till mig för att du är {0}?",
            "Hur länge har du varit {0}?",
            "Hur känns det att vara {0}?",
            "Berätta mer om hur du har det.",
        ],
    },
    Rule {
        id: "are_you",
        triggers: &[Trigger::Prefix("är du")],
        templates: &[
            "Varför spelar det någon roll om jag är {0}?",
            "Skulle du föredra om jag inte var {0}?",
            "Kanske tror du att jag är {0}.",
            "Jag kan vara {0}, vad tror du?",
            "Varför är du intresserad av mig?",
        ],
    },
    Rule {
        id: "what",
        triggers: &[Trigger::Prefix("vad")],
        templates: &[
            "Varför frågar du?",
            "Hur skulle ett svar på det hjälpa dig?",
            "Vad tror du själv?",
        ],
    },
    Rule {
        id: "how",
        triggers: &[Trigger::Prefix("hur")],
        templates: &[
            "Hur menar du?",
            "Kanske kan du besvara din egen fråga.",
            "Vad är det egentligen du undrar?",
        ],
    },
    Rule {
        id: "because",
        triggers: &[Trigger::Prefix("för att"), Trigger::Prefix("eftersom")],
        templates: &[
            "Är det den verkliga orsaken?",
            "Vilka andra skäl kommer du att tänka på?",
            "Gäller den orsaken i andra sammanhang?",
            "Om {0}, vad mer måste vara sant?",
        ],
    },
    Rule {
        id: "hello",
        triggers: &[Trigger::Prefix("hej"), Trigger::Prefix("hallå")],
        templates: &[
            "Hej... jag lyssnar.",
            "Hej där... hur kan jag hjälpa dig?",
            "Hej, hur mår du idag?",
        ],
    },
    Rule {
        id: "i_think",
        triggers: &[Trigger::Literal("jag tror")],
        templates: &[
            "Tvivlar du på {0}?",
            "Tror du verkligen det?",
            "Men du är inte säker på {0}?",
        ],
    },
    Rule {
        id: "yes",
        triggers: &[Trigger::Prefix("ja")],
        templates: &["Du verkar ganska säker.", "Okej, men kan du utveckla lite?"],
    },
    Rule {
        id: "is_it",
        triggers: &[Trigger::Prefix("är det")],
        templates: &[
            "Tycker du att det är {0}?",
            "Kanske är det {0}, vad tror du?",
            "Om det vore {0}, vad skulle du göra?",
            "Det kan mycket väl vara {0}.",
            "Vad tror du själv att det är?",
        ],
    },
    Rule {
        id: "it_is",
        triggers: &[Trigger::Prefix("det är")],
        templates: &[
            "Du verkar väldigt säker.",
            "Om jag sa att det troligen inte är {0}, hur skulle du känna då?",
        ],
    },
    Rule {
        id: "can_you",
        triggers: &[Trigger::Prefix("kan du")],
        templates: &[
            "Varför tror du att jag inte kan {0}?",
            "Om jag kunde {0}, vad då?",
            "Varför frågar du om jag kan {0}?",
            "Vad vill du att jag ska göra?",
        ],
    },
    Rule {
        id: "can_i",
        triggers: &[Trigger::Prefix("kan jag")],
        templates: &[
            "Kanske vill du inte {0}.",
            "Vill du kunna {0}?",
            "Om du kunde {0}, skulle du det?",
            "Vad är det som hindrar dig?",
        ],
    },
    Rule {
        id: "you_are",
        triggers: &[Trigger::Prefix("du är")],
        templates: &[
            "Varför tror du att jag är {0}?",
            "Gör det dig glad att tänka att jag är {0}?",
            "Kanske vill du att jag ska vara {0}.",
            "Kanske pratar du egentligen om dig själv?",
        ],
    },
    Rule {
        id: "i_dont",
        triggers: &[
            Trigger::Prefix("jag gör inte"),
            Trigger::Prefix("jag vill inte"),
        ],
        templates: &[
            "Gör du verkligen inte {0}?",
            "Varför gör du inte {0}?",
            "Vill du göra {0}?",
            "Varför inte?",
        ],
    },
    Rule {
        id: "i_feel_self",
        triggers: &[Trigger::Prefix("jag känner mig")],
        templates: &[
            "Bra, berätta mer om de här känslorna.",
            "Känner du dig ofta {0}?",
            "När brukar du känna dig {0}?",
            "När du känner dig {0}, vad gör du då?",
        ],
    },
    Rule {
        id: "i_feel",
        triggers: &[Trigger::Prefix("jag känner")],
        templates: &[
            "Berätta mer om de känslorna.",
            "Känner du ofta {0}?",
            "När känner du {0}?",
        ],
    },
    Rule {
        id: "i_have",
        triggers: &[Trigger::Prefix("jag har")],
        templates: &[
            "Varför berättar du att du har {0}?",
            "Har du verkligen {0}?",
            "Nu när du har {0}, vad gör du härnäst?",
            "Vad mer har du på hjärtat?",
        ],
    },
    Rule {
        id: "i_would",
        triggers: &[Trigger::Prefix("jag skulle")],
        templates: &[
            "Kan du förklara varför du skulle {0}?",
            "Varför skulle du {0}?",
            "Vem mer vet att du skulle {0}?",
            "Vad skulle du göra?",
        ],
    },
    Rule {
        id: "is_there",
        triggers: &[Trigger::Prefix("finns det")],
        templates: &[
            "Tror du att det finns {0}?",
            "Det är troligt att det finns {0}.",
            "Skulle du vilja att det fanns {0}?",
            "Tror du att det finns det?",
        ],
    },
    Rule {
        id: "my",
        triggers: &[
            Trigger::Prefix("min"),
            Trigger::Prefix("mitt"),
            Trigger::Prefix("mina"),
        ],
        templates: &[
            "Jag förstår, din {0}.",
            "Varför säger du att din {0}?",
            "När din {0}, hur känns det då?",
            "Berätta mer om dig själv.",
        ],
    },
    Rule {
        id: "you",
        triggers: &[Trigger::Prefix("du")],
        templates: &[
            "Vi borde prata om dig, inte mig.",
            "Varför säger du det där om mig?",
            "Varför bryr du dig om huruvida jag {0}?",
        ],
    },
    Rule {
        id: "why",
        triggers: &[Trigger::Prefix("varför")],
        templates: &[
            "Varför berättar du inte anledningen till varför {0}?",
            "Varför tror du att {0}?",
            "Varför frågar du?",
        ],
    },
    Rule {
        id: "i_want",
        triggers: &[Trigger::Prefix("jag vill")],
        templates: &[
            "Vad skulle det betyda för dig om du fick {0}?",
            "Varför vill du ha {0}?",
            "Vad skulle du göra om du fick {0}?",
            "Om du fick {0}, vad skulle du göra då?",
            "Vad är det du vill?",
        ],
    },
    Rule {
        id: "question",
        triggers: &[Trigger::Question],
        templates: &[
            "Varför frågar du det?",
            "Fundera på om du kan svara på din egen fråga.",
            "Kanske finns svaret inom dig?",
            "Varför berättar du inte för mig?",
        ],
    },
    Rule {
        id: "fallback",
        triggers: &[Trigger::Any],
        templates: &[
            "Berätta mer.",
            "Låt oss byta fokus lite... berätta om din familj.",
            "Kan du utveckla det?",
            "Varför säger du att {0}?",
            "Jag förstår.",
            "Väldigt intressant.",
            "{0}.",
            "Jag förstår. Och vad säger det dig?",
            "Hur får det dig att känna?",
            "Hur känner du när du säger det?",
        ],
    },
];

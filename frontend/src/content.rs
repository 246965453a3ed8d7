//! Static copy for the landing page.

pub const PRODUCT_NAME: &str = "Manual Estoico";
pub const PRICE: &str = "R$67";
pub const INSTALLMENTS: &str = "ou em até 12x de R$6,70 no cartão";
pub const BONUS_TOTAL: &str = "R$98";
pub const HERO_BACKGROUND_URL: &str =
    "https://optimalhealthscout.shop/wp-content/uploads/2025/05/imagem_gerada-2025-05-21T125256.553.png";
pub const GUARANTEE_SEAL_URL: &str =
    "https://optimalhealthscout.shop/wp-content/uploads/2025/05/Etiqueta-selo-de-garantia-moderno-em-dourado-1.png";

#[derive(Debug, PartialEq)]
pub struct LearningArea {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct CourseModule {
    pub number: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub lessons: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct Bonus {
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub image_url: &'static str,
    pub alt: &'static str,
}

pub const LEARNING_AREAS: &[LearningArea] = &[
    LearningArea {
        title: "Controle Emocional",
        description: "Aprenda a responder em vez de reagir às situações, mantendo a calma mesmo nos momentos mais difíceis.",
        icon: "fas fa-brain",
    },
    LearningArea {
        title: "Foco no Essencial",
        description: "Identifique o que realmente está sob seu controle e pare de desperdiçar energia com o que não pode mudar.",
        icon: "fas fa-bullseye",
    },
    LearningArea {
        title: "Resiliência Mental",
        description: "Desenvolva uma mente inabalável que permanece forte e clara mesmo diante das maiores adversidades.",
        icon: "fas fa-bolt",
    },
    LearningArea {
        title: "Relacionamentos Saudáveis",
        description: "Transforme suas interações com os outros através da compreensão, paciência e comunicação efetiva.",
        icon: "fas fa-heart",
    },
    LearningArea {
        title: "Clareza de Propósito",
        description: "Descubra seu propósito de vida e alinhe suas ações diárias com seus valores mais profundos.",
        icon: "fas fa-lightbulb",
    },
    LearningArea {
        title: "Produtividade Superior",
        description: "Elimine a procrastinação e desenvolva uma disciplina inabalável para realizar o que realmente importa.",
        icon: "fas fa-fire",
    },
];

pub const COURSE_MODULES: &[CourseModule] = &[
    CourseModule {
        number: 1,
        title: "Fundamentos do Estoicismo",
        description: "Compreenda os princípios básicos da filosofia estoica e como eles se aplicam à vida moderna.",
        icon: "🧠",
        lessons: &[
            "A história do Estoicismo e seus principais filósofos",
            "Os três pilares do Estoicismo: Lógica, Física e Ética",
            "A dicotomia do controle: o que está e o que não está sob seu controle",
            "Como aplicar o Estoicismo no século 21",
        ],
    },
    CourseModule {
        number: 2,
        title: "Dominando Suas Emoções",
        description: "Aprenda técnicas práticas para gerenciar suas emoções e responder em vez de reagir às situações.",
        icon: "💪",
        lessons: &[
            "Como as emoções são formadas segundo a visão estoica",
            "Técnicas para identificar e interromper reações emocionais negativas",
            "O método de 4 passos para transformar emoções destrutivas",
            "Exercícios diários para fortalecer seu controle emocional",
        ],
    },
    CourseModule {
        number: 3,
        title: "A Dicotomia do Controle",
        description: "Domine a habilidade de focar apenas no que está sob seu controle e libertar-se da ansiedade.",
        icon: "⚖️",
        lessons: &[
            "Como identificar o que realmente está sob seu controle",
            "Técnica da visualização negativa (premeditatio malorum)",
            "Como desenvolver a indiferença estoica (apatheia)",
            "Exercícios práticos para aplicar a dicotomia do controle no dia a dia",
        ],
    },
    CourseModule {
        number: 4,
        title: "Virtudes Estoicas na Prática",
        description: "Incorpore as quatro virtudes cardeais do Estoicismo em sua vida diária.",
        icon: "✨",
        lessons: &[
            "Sabedoria (Sophia): como tomar decisões mais sábias",
            "Coragem (Andreia): como enfrentar seus medos",
            "Justiça (Dikaiosyne): como agir com integridade em todas as situações",
            "Temperança (Sophrosyne): como desenvolver autocontrole e moderação",
        ],
    },
    CourseModule {
        number: 5,
        title: "Relacionamentos Estoicos",
        description: "Transforme suas interações com os outros através dos princípios estoicos.",
        icon: "👥",
        lessons: &[
            "Como lidar com pessoas difíceis usando princípios estoicos",
            "Técnicas para comunicação efetiva baseada em valores",
            "Como desenvolver empatia genuína sem se deixar afetar emocionalmente",
            "Estratégias para resolver conflitos com sabedoria estoica",
        ],
    },
    CourseModule {
        number: 6,
        title: "Produtividade e Foco",
        description: "Elimine a procrastinação e desenvolva uma disciplina inabalável para realizar o que importa.",
        icon: "🎯",
        lessons: &[
            "Como definir prioridades baseadas em valores estoicos",
            "Técnicas para eliminar distrações e manter o foco",
            "O método estoico para vencer a procrastinação",
            "Como desenvolver hábitos positivos que duram",
        ],
    },
    CourseModule {
        number: 7,
        title: "Resiliência Mental Avançada",
        description: "Desenvolva uma mente que permanece forte e clara mesmo nas situações mais desafiadoras.",
        icon: "🔄",
        lessons: &[
            "Como transformar adversidades em oportunidades de crescimento",
            "Técnicas avançadas de meditação estoica",
            "Como desenvolver uma perspectiva cósmica (visão do alto)",
            "Integrando o Estoicismo como filosofia de vida permanente",
        ],
    },
];

pub const BONUSES: &[Bonus] = &[
    Bonus {
        title: "Biblioteca Estoica Digital",
        description: "Acesso a 5 obras clássicas do Estoicismo em formato digital.",
        value: "R$27",
        icon: "fas fa-book-open",
    },
    Bonus {
        title: "Diário Estoico (PDF)",
        description: "Template para acompanhar sua prática diária e registrar seus progressos.",
        value: "R$17",
        icon: "fas fa-book-open",
    },
    Bonus {
        title: "Guia de Aplicação Rápida",
        description: "Resumo prático para consulta rápida em momentos de necessidade.",
        value: "R$17",
        icon: "fas fa-bolt",
    },
    Bonus {
        title: "Suporte por Email",
        description: "Tire suas dúvidas diretamente com nossa equipe por 30 dias.",
        value: "R$37",
        icon: "fas fa-comment",
    },
    Bonus {
        title: "Acesso à Comunidade Privada",
        description: "Junte-se a outros praticantes do Estoicismo para suporte mútuo.",
        value: "R$37/mês",
        icon: "fas fa-users",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "O que exatamente eu recebo por R$67?",
        answer: "Você recebe o Manual Estoico Digital completo com 7 módulos, 21 exercícios práticos diários, 7 meditações estoicas em PDF, acesso ao grupo privado de praticantes, e todos os 5 bônus exclusivos. Todo o material tem acesso vitalício.",
    },
    Faq {
        question: "Preciso ter conhecimento prévio sobre Estoicismo?",
        answer: "Não. O Manual foi desenhado para iniciantes absolutos. Começamos com os conceitos mais básicos e progredimos gradualmente. Tudo é explicado em linguagem simples e direta.",
    },
    Faq {
        question: "Quanto tempo leva para ver resultados?",
        answer: "A maioria dos alunos relata mudanças perceptíveis em sua resposta emocional já na primeira semana. O programa completo dura 21 dias, e ao final deste período, você terá desenvolvido uma nova forma de pensar e reagir às situações.",
    },
    Faq {
        question: "O Estoicismo é compatível com minha religião?",
        answer: "Sim. O Estoicismo é uma filosofia prática, não uma religião. Seus princípios são compatíveis com praticamente todas as tradições religiosas, pois focam em virtudes universais como sabedoria, coragem, justiça e moderação.",
    },
    Faq {
        question: "Como funciona a garantia?",
        answer: "Você tem 7 dias para avaliar o material. Se não ficar satisfeito por qualquer motivo, basta enviar um email e devolveremos 100% do seu dinheiro, sem perguntas.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        image_url: "https://optimalhealthscout.shop/wp-content/uploads/2025/05/sem-Rafael-prova2.png",
        alt: "Depoimento 1",
    },
    Testimonial {
        image_url: "https://optimalhealthscout.shop/wp-content/uploads/2025/05/sem-Carlos-prova2.png",
        alt: "Depoimento 2",
    },
    Testimonial {
        image_url: "https://optimalhealthscout.shop/wp-content/uploads/2025/05/sem-Beatriz-prova4.png",
        alt: "Depoimento 3",
    },
    Testimonial {
        image_url: "https://optimalhealthscout.shop/wp-content/uploads/2025/05/sem-Andre-prova4.png",
        alt: "Depoimento 4",
    },
];

pub const STAY_THE_SAME: &[&str] = &[
    "Continuar reagindo emocionalmente a situações cotidianas",
    "Permanecer à mercê de ansiedade e preocupações desnecessárias",
    "Desperdiçar energia com o que você não pode controlar",
    "Manter relacionamentos prejudicados por reações impulsivas",
    "Acordar amanhã exatamente como você acordou hoje",
];

pub const TRANSFORM: &[&str] = &[
    "Desenvolver controle emocional em qualquer situação",
    "Eliminar ansiedade focando apenas no que você pode controlar",
    "Construir relacionamentos mais saudáveis e produtivos",
    "Encontrar clareza de propósito e significado em sua vida",
    "Começar uma nova jornada de transformação hoje mesmo",
];

pub const PAYMENT_METHODS: &[&str] = &["Visa", "Master", "Pix", "Boleto"];

/// Names cycled through by the recent-purchase toast.
pub const RECENT_BUYERS: &[&str] = &[
    "Carlos de São Paulo",
    "Mariana de Belo Horizonte",
    "Rafael do Rio de Janeiro",
    "Beatriz de Curitiba",
    "André de Porto Alegre",
];

pub fn recent_buyer(shown_count: u32) -> &'static str {
    let index = (shown_count.max(1) - 1) as usize % RECENT_BUYERS.len();
    RECENT_BUYERS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_five_bonuses() {
        assert_eq!(BONUSES.len(), 5);
    }

    #[test]
    fn modules_are_numbered_from_one_without_gaps() {
        for (i, module) in COURSE_MODULES.iter().enumerate() {
            assert_eq!(module.number as usize, i + 1);
            assert!(!module.lessons.is_empty());
        }
    }

    #[test]
    fn recent_buyers_cycle() {
        assert_eq!(recent_buyer(0), "Carlos de São Paulo");
        assert_eq!(recent_buyer(1), "Carlos de São Paulo");
        assert_eq!(recent_buyer(2), RECENT_BUYERS[1]);
        assert_eq!(recent_buyer(RECENT_BUYERS.len() as u32 + 1), RECENT_BUYERS[0]);
    }

    #[test]
    fn every_faq_has_an_answer() {
        assert!(FAQS.iter().all(|f| !f.question.is_empty() && !f.answer.is_empty()));
    }
}

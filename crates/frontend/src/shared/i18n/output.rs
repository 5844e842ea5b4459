//! Static content of the Output and Debug terminal tabs.

use super::Language;

pub fn output_lines(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Pt => &[
            "Às vezes sinto que passo mais tempo resolvendo bugs do que interagindo com pessoas.",
            "Sou como o Batman, mas ao invés de lutar contra o crime, luto contra erros de sintaxe.",
            "Não sou um mago da tecnologia, mas já fiz um programa imprimir \"Hello World\" sem nenhum erro!",
            "Trabalhar com tecnologia é como brincar de Lego: construir coisas incríveis a partir de pequenas peças.",
            "Os bugs não são defeitos, são recursos não documentados",
            "Programar é fácil, exceto quando não é",
        ],
        Language::En => &[
            "Sometimes I feel like I spend more time fixing bugs than interacting with people.",
            "I'm like Batman, but instead of fighting crime, I fight syntax errors.",
            "I'm not a tech wizard, but I once made a program print \"Hello World\" without a single error!",
            "Working with technology is like playing with Lego: building amazing things out of small pieces.",
            "Bugs are not defects, they are undocumented features",
            "Programming is easy, except when it isn't",
        ],
    }
}

pub fn debug_lines(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Pt => &[
            "Depurador anexado.",
            "Digite 'avaliar' no terminal para deixar sua avaliação.",
        ],
        Language::En => &[
            "Debugger attached.",
            "Type 'evaluate' in the terminal to leave a review.",
        ],
    }
}
